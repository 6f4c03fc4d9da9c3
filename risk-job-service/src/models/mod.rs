pub mod borrower_risk;

pub use borrower_risk::{BorrowerRisk, RISK_SCORE_RANGE};
