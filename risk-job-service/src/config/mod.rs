use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RiskJobConfig {
    #[serde(default)]
    pub server: core_config::Config,
    #[serde(default)]
    pub risk_job: RiskJobSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RiskJobSettings {
    /// Pause before the run endpoint reads the store, standing in for real
    /// scoring work.
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
}

fn default_simulated_delay_ms() -> u64 {
    1000
}

impl Default for RiskJobSettings {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_simulated_delay_ms(),
        }
    }
}

impl RiskJobSettings {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

impl RiskJobConfig {
    /// Load from `configuration.*` and `APP__` environment variables,
    /// e.g. `APP__SERVER__PORT=9000` or `APP__RISK_JOB__SIMULATED_DELAY_MS=0`.
    pub fn load() -> Result<Self, AppError> {
        core_config::load()
    }
}
