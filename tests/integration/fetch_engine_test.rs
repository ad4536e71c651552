// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use prospectrs::engines::http_engine::HttpFetchEngine;
use prospectrs::engines::traits::{FetchError, PageFetcher};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_success_returns_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<html><title>Hello</title></html>", "text/html; charset=utf-8"),
        )
        .mount(&server)
        .await;

    let engine = HttpFetchEngine::permissive("prospectrs-test");
    let page = engine
        .fetch(&server.uri(), Duration::from_secs(5))
        .await
        .unwrap();

    assert_eq!(page.status_code, 200);
    assert!(page.content.contains("Hello"));
    assert!(page.content_type.starts_with("text/html"));
}

#[tokio::test]
async fn test_non_2xx_is_terminal_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let engine = HttpFetchEngine::permissive("prospectrs-test");
    let result = engine.fetch(&server.uri(), Duration::from_secs(5)).await;

    assert!(matches!(result, Err(FetchError::HttpStatus(404))));
}

#[tokio::test]
async fn test_slow_site_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html></html>")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let engine = HttpFetchEngine::permissive("prospectrs-test");
    let result = engine
        .fetch(&server.uri(), Duration::from_millis(200))
        .await;

    assert!(matches!(result, Err(FetchError::Timeout)));
}

#[tokio::test]
async fn test_strict_engine_blocks_loopback_targets() {
    let server = MockServer::start().await;

    // non-permissive engine refuses the loopback mock before any request goes out
    let engine = HttpFetchEngine::new("prospectrs-test");
    let result = engine.fetch(&server.uri(), Duration::from_secs(5)).await;

    assert!(matches!(result, Err(FetchError::Blocked(_))));
}
