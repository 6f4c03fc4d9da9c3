mod common;

use common::TestApp;
use reqwest::Client;
use risk_job_service::services::init_metrics;

#[tokio::test]
async fn metrics_endpoint_exposes_request_and_risk_job_counters() {
    init_metrics();
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(app.url("/api/riskjob/run-risk-job"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    let response = client
        .post(app.url("/api/riskjob/init-risk"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);

    let response = client
        .get(app.url("/api/riskjob/run-risk-job"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body = client
        .get(app.url("/metrics"))
        .send()
        .await
        .expect("Failed to execute request")
        .text()
        .await
        .expect("Failed to get response body");

    assert!(
        body.contains("borrower_risk_records_created_total"),
        "Missing creation counter: {}",
        body
    );
    assert!(
        body.contains(r#"risk_job_runs_total{outcome="empty"}"#),
        "Missing empty run counter: {}",
        body
    );
    assert!(
        body.contains(r#"risk_job_runs_total{outcome="found"}"#),
        "Missing found run counter: {}",
        body
    );
    assert!(
        body.contains("http_requests_total"),
        "Missing request counter: {}",
        body
    );
    assert!(
        body.contains(r#"path="/api/riskjob/init-risk""#),
        "Request counter not labelled by route: {}",
        body
    );
}
