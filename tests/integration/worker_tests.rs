// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{html_page, test_repository, worker_server, TEST_USER_AGENT};
use axum::body::Bytes;
use axum::http::StatusCode;
use pagegrab::application::dto::batch_response::BatchResultDto;
use pagegrab::domain::repositories::page_result_repository::PageResultRepository;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_worker_scrapes_and_persists_batch() {
    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .and(header("user-agent", TEST_USER_AGENT))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(html_page("Hi", "d"), "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(&site)
        .await;

    let repository = test_repository().await;
    let server = worker_server(repository.clone());
    let url = format!("{}/page", site.uri());

    let response = server
        .post("/enqueue")
        .json(&json!({ "urls": [url] }))
        .await;

    response.assert_status_ok();
    let body: BatchResultDto = response.json();
    assert_eq!(body.processed, 1);
    let result = &body.results[0];
    assert_eq!(result.url, url);
    assert_eq!(result.status_code, Some(200));
    assert_eq!(result.title.as_deref(), Some("Hi"));
    assert_eq!(result.description.as_deref(), Some("d"));
    assert!(result.error.is_none());

    let stored = repository.find_recent(10).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].url, url);
    assert_eq!(stored[0].status_code, Some(200));
    assert_eq!(stored[0].title.as_deref(), Some("Hi"));
}

#[tokio::test]
async fn test_worker_reports_per_url_failures_with_ok_status() {
    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("nope"))
        .mount(&site)
        .await;

    let repository = test_repository().await;
    let server = worker_server(repository.clone());
    let missing = format!("{}/missing", site.uri());
    let refused = "http://127.0.0.1:9/".to_string();

    let response = server
        .post("/enqueue")
        .json(&json!({ "urls": [missing, refused] }))
        .await;

    response.assert_status_ok();
    let body: BatchResultDto = response.json();
    assert_eq!(body.processed, 2);

    // 404 is a completed transaction, not an error
    assert_eq!(body.results[0].url, missing);
    assert_eq!(body.results[0].status_code, Some(404));
    assert!(body.results[0].title.is_none());
    assert!(body.results[0].error.is_none());

    assert_eq!(body.results[1].url, refused);
    assert!(body.results[1].status_code.is_none());
    assert!(body.results[1].error.is_some());

    assert_eq!(repository.find_recent(10).await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_worker_accepts_empty_batch() {
    let repository = test_repository().await;
    let server = worker_server(repository.clone());

    let response = server.post("/enqueue").json(&json!({ "urls": [] })).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "processed": 0, "results": [] }));
    assert!(repository.find_recent(10).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_worker_rejects_malformed_json_body() {
    let repository = test_repository().await;
    let server = worker_server(repository.clone());

    let response = server
        .post("/enqueue")
        .content_type("application/json")
        .bytes(Bytes::from_static(b"not json"))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert!(body["detail"].is_string());
    assert!(repository.find_recent(10).await.unwrap().is_empty());
}
