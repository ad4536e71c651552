// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::helpers::{test_app, RICH_PAGE, SPARSE_PAGE};
use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn html_server(html: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(html)
                .insert_header("content-type", "text/html"),
        )
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_health_and_version() {
    let dir = TempDir::new().unwrap();
    let server = TestServer::new(test_app(&dir.path().to_string_lossy())).unwrap();

    let health = server.get("/health").await;
    health.assert_status(StatusCode::OK);
    assert_eq!(health.text(), "OK");

    let version = server.get("/v1/version").await;
    version.assert_status(StatusCode::OK);
    assert!(!version.text().is_empty());
}

#[tokio::test]
async fn test_analyze_returns_full_report() {
    let site = html_server(RICH_PAGE).await;
    let dir = TempDir::new().unwrap();
    let server = TestServer::new(test_app(&dir.path().to_string_lossy())).unwrap();

    let response = server
        .post("/v1/analyze")
        .json(&json!({"url": site.uri()}))
        .await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["success"], json!(true));
    assert!(body["data"]["automation_score"].as_u64().unwrap() <= 100);
    assert!(body["data"]["lead_score"]["overall"].as_u64().unwrap() >= 60);
    assert!(body["data"]["recommendations"].as_array().is_some());
}

#[tokio::test]
async fn test_analyze_rejects_empty_url() {
    let dir = TempDir::new().unwrap();
    let server = TestServer::new(test_app(&dir.path().to_string_lossy())).unwrap();

    let response = server.post("/v1/analyze").json(&json!({"url": ""})).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["success"], json!(false));
}

#[tokio::test]
async fn test_batch_rejects_more_than_five_urls() {
    let dir = TempDir::new().unwrap();
    let server = TestServer::new(test_app(&dir.path().to_string_lossy())).unwrap();

    let urls: Vec<String> = (0..6)
        .map(|i| format!("https://example{}.com", i))
        .collect();
    let response = server
        .post("/v1/analyze/batch")
        .json(&json!({ "urls": urls }))
        .await;

    // the whole request is rejected, nothing is silently truncated
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Maximum 5 URLs allowed per batch"));
}

#[tokio::test]
async fn test_batch_isolates_per_url_failures() {
    let good = html_server(SPARSE_PAGE).await;
    let bad = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&bad)
        .await;

    let dir = TempDir::new().unwrap();
    let server = TestServer::new(test_app(&dir.path().to_string_lossy())).unwrap();

    let response = server
        .post("/v1/analyze/batch")
        .json(&json!({"urls": [good.uri(), bad.uri()]}))
        .await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["summary"]["total_urls"], json!(2));
    assert_eq!(body["summary"]["successful"], json!(1));
    assert_eq!(body["summary"]["failed"], json!(1));

    let results = body["results"].as_array().unwrap();
    assert_eq!(results[0]["success"], json!(true));
    assert_eq!(results[1]["success"], json!(false));
    assert!(results[1]["error"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn test_lead_score_returns_summary() {
    let site = html_server(RICH_PAGE).await;
    let dir = TempDir::new().unwrap();
    let server = TestServer::new(test_app(&dir.path().to_string_lossy())).unwrap();

    let response = server
        .post("/v1/lead-score")
        .json(&json!({"url": site.uri()}))
        .await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    let data = &body["data"];
    assert!(data["overall_score"].as_u64().unwrap() >= 60);
    assert!(["qualified", "premium"]
        .contains(&data["lead_quality"].as_str().unwrap()));
    assert!(data["deal_size_estimate"].as_str().unwrap().contains('$'));
    // summary must not carry the full detection dump
    assert!(data.get("detections").is_none());
}

#[tokio::test]
async fn test_report_renders_and_stores_markdown() {
    let site = html_server(SPARSE_PAGE).await;
    let dir = TempDir::new().unwrap();
    let server = TestServer::new(test_app(&dir.path().to_string_lossy())).unwrap();

    let response = server
        .post("/v1/report")
        .json(&json!({"url": site.uri(), "format": "markdown", "store": true}))
        .await;
    response.assert_status(StatusCode::OK);

    let body: Value = response.json();
    let rendered = body["report"].as_str().unwrap();
    assert!(rendered.contains("# Website Automation Analysis Report"));

    let stored_as = body["stored_as"].as_str().unwrap();
    assert!(dir.path().join(stored_as).exists());
}

#[tokio::test]
async fn test_report_rejects_unknown_format() {
    let dir = TempDir::new().unwrap();
    let server = TestServer::new(test_app(&dir.path().to_string_lossy())).unwrap();

    let response = server
        .post("/v1/report")
        .json(&json!({"url": "https://example.com", "format": "pdf"}))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unreachable_site_maps_to_bad_gateway() {
    let dir = TempDir::new().unwrap();
    let server = TestServer::new(test_app(&dir.path().to_string_lossy())).unwrap();

    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&site)
        .await;

    let response = server
        .post("/v1/analyze")
        .json(&json!({"url": site.uri()}))
        .await;
    response.assert_status(StatusCode::BAD_GATEWAY);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Analysis failed"));
}
