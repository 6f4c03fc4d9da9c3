//! Metrics collection and Prometheus export.
//!
//! Initializes the metrics exporter and provides the /metrics endpoint handler.

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

/// Global handle to the Prometheus recorder.
pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder as the global `metrics` recorder.
///
/// Only the first call installs anything; later calls are no-ops, so tests
/// sharing a process can each call it.
pub fn init_metrics() {
    METRICS_HANDLE.get_or_init(|| {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        if let Err(e) = metrics::set_global_recorder(recorder) {
            tracing::warn!("Failed to install Prometheus recorder: {}", e);
        }

        handle
    });
}

/// Get the current metrics in Prometheus text format.
pub fn get_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized".to_string())
}

/// Count a completed risk job run. `found` is false when the store was empty.
pub fn record_risk_job_run(found: bool) {
    let outcome = if found { "found" } else { "empty" };
    counter!("risk_job_runs_total", "outcome" => outcome).increment(1);
}

pub fn record_borrower_risk_created() {
    counter!("borrower_risk_records_created_total").increment(1);
}
