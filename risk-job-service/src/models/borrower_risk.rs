use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use uuid::Uuid;

/// Half-open range that freshly generated risk scores are drawn from.
pub const RISK_SCORE_RANGE: Range<i32> = 1..100;

/// Risk score attached to a single borrower.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BorrowerRisk {
    pub borrower_id: Uuid,
    pub risk_score: i32,
}

impl BorrowerRisk {
    pub fn new(borrower_id: Uuid, risk_score: i32) -> Self {
        Self {
            borrower_id,
            risk_score,
        }
    }

    /// A record for a brand new borrower with a random score.
    pub fn generate() -> Self {
        Self {
            borrower_id: Uuid::new_v4(),
            risk_score: rand::thread_rng().gen_range(RISK_SCORE_RANGE),
        }
    }
}
