use risk_job_service::config::{RiskJobConfig, RiskJobSettings};
use risk_job_service::startup::Application;
use service_core::config::Config;

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_delay(0).await
    }

    #[allow(dead_code)]
    pub async fn spawn_with_delay(simulated_delay_ms: u64) -> Self {
        let config = RiskJobConfig {
            server: Config {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port
                ..Config::default()
            },
            risk_job: RiskJobSettings { simulated_delay_ms },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, port }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}
