pub mod health;
pub mod risk_job;

pub use health::{health_check, metrics_endpoint, readiness_check};
pub use risk_job::{init_risk, run_risk_job, NO_RECORDS_MESSAGE};
