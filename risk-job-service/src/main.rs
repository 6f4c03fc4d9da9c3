use risk_job_service::config::RiskJobConfig;
use risk_job_service::services::init_metrics;
use risk_job_service::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = RiskJobConfig::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    // Initialize metrics recorder (must be before any metrics are recorded)
    init_metrics();

    init_tracing(
        "risk-job-service",
        &config.server.log_level,
        config.server.otlp_endpoint.as_deref(),
    );

    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    Ok(())
}
