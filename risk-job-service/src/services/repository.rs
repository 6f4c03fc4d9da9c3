use crate::models::BorrowerRisk;
use anyhow::Result;
use async_trait::async_trait;

/// Storage for borrower risk records, keyed by borrower id.
#[async_trait]
pub trait BorrowerRiskRepository: Send + Sync {
    /// Insert the record, replacing any existing record with the same
    /// `borrower_id`.
    async fn add_or_update(&self, borrower_risk: BorrowerRisk) -> Result<()>;

    /// Every stored record, in no particular order. Empty when nothing has
    /// been stored yet.
    async fn get_all(&self) -> Result<Vec<BorrowerRisk>>;
}
