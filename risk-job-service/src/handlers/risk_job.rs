use crate::models::BorrowerRisk;
use crate::services::metrics::{record_borrower_risk_created, record_risk_job_run};
use crate::startup::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use service_core::error::AppError;

pub const NO_RECORDS_MESSAGE: &str = "No borrower risk records found.";

/// Simulate a risk job run, then return every stored record.
///
/// An empty store is answered with 404 and a plain-text message rather than
/// an empty list.
pub async fn run_risk_job(State(state): State<AppState>) -> Result<Response, AppError> {
    tracing::info!("Risk job started.");

    tokio::time::sleep(state.simulated_delay).await;

    let risks = state.repository.get_all().await?;
    tracing::info!("Risk job completed.");

    if risks.is_empty() {
        tracing::warn!("{}", NO_RECORDS_MESSAGE);
        record_risk_job_run(false);
        return Ok((StatusCode::NOT_FOUND, NO_RECORDS_MESSAGE).into_response());
    }

    tracing::info!(count = risks.len(), "Retrieved borrower risk records.");
    record_risk_job_run(true);

    Ok((StatusCode::OK, Json(risks)).into_response())
}

/// Create one borrower risk record with a fresh id and random score.
///
/// The request body is ignored and the response body is empty.
pub async fn init_risk(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    tracing::info!("Initializing borrower risk record.");

    let borrower_risk = BorrowerRisk::generate();

    tracing::info!(
        borrower_id = %borrower_risk.borrower_id,
        risk_score = borrower_risk.risk_score,
        "Adding borrower risk"
    );
    state.repository.add_or_update(borrower_risk).await?;
    record_borrower_risk_created();

    Ok(StatusCode::CREATED)
}
