// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{api_server, test_repository};
use axum::body::Bytes;
use axum::http::StatusCode;
use pagegrab::application::dto::batch_response::EnqueueResponseDto;
use pagegrab::application::dto::results_query::ResultsResponseDto;
use pagegrab::domain::models::page_result::PageResult;
use pagegrab::domain::repositories::page_result_repository::PageResultRepository;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_enqueue_forwards_batch_to_worker() {
    let worker = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/enqueue"))
        .and(body_json(json!({
            "urls": ["https://example.com/", "https://example.org/a"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "processed": 2,
            "results": []
        })))
        .expect(1)
        .mount(&worker)
        .await;

    let server = api_server(&format!("{}/enqueue", worker.uri()), test_repository().await);

    let response = server
        .post("/enqueue")
        .json(&json!({ "urls": ["https://example.com", "https://example.org/a"] }))
        .await;

    response.assert_status_ok();
    let body: EnqueueResponseDto = response.json();
    assert_eq!(body.enqueued, 2);
    assert_eq!(
        body.urls,
        vec!["https://example.com/", "https://example.org/a"]
    );
}

#[tokio::test]
async fn test_enqueue_rejects_invalid_url_without_forwarding() {
    let worker = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/enqueue"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&worker)
        .await;

    let server = api_server(&format!("{}/enqueue", worker.uri()), test_repository().await);

    let response = server
        .post("/enqueue")
        .json(&json!({ "urls": ["https://example.com", "not-a-url"] }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert!(body["detail"].as_str().unwrap().contains("not-a-url"));
}

#[tokio::test]
async fn test_enqueue_rejects_non_http_scheme() {
    let server = api_server("http://127.0.0.1:9/enqueue", test_repository().await);

    let response = server
        .post("/enqueue")
        .json(&json!({ "urls": ["ftp://example.com/file"] }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_enqueue_surfaces_worker_failure() {
    let worker = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/enqueue"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&worker)
        .await;

    let server = api_server(&format!("{}/enqueue", worker.uri()), test_repository().await);

    let response = server
        .post("/enqueue")
        .json(&json!({ "urls": ["https://example.com"] }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_enqueue_surfaces_unreachable_worker() {
    let server = api_server("http://127.0.0.1:9/enqueue", test_repository().await);

    let response = server
        .post("/enqueue")
        .json(&json!({ "urls": ["https://example.com"] }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_results_are_newest_first_and_limited() {
    let repository = test_repository().await;
    repository
        .save(&PageResult::success("https://a.example/", 200, None, None, 10))
        .await
        .unwrap();
    repository
        .save(&PageResult::failure("https://b.example/", "timed out", 20))
        .await
        .unwrap();

    let server = api_server("http://127.0.0.1:9/enqueue", repository);

    let all: ResultsResponseDto = server.get("/results").await.json();
    assert_eq!(all.items.len(), 2);
    assert_eq!(all.items[0].url, "https://b.example/");
    assert_eq!(all.items[0].error.as_deref(), Some("timed out"));
    assert_eq!(all.items[1].url, "https://a.example/");

    let response = server.get("/results").add_query_param("limit", 1).await;
    response.assert_status_ok();
    let limited: ResultsResponseDto = response.json();
    assert_eq!(limited.items.len(), 1);
    assert_eq!(limited.items[0].url, "https://b.example/");
}

#[tokio::test]
async fn test_results_empty_table() {
    let server = api_server("http://127.0.0.1:9/enqueue", test_repository().await);

    let response = server.get("/results").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "items": [] }));
}

#[tokio::test]
async fn test_enqueue_rejects_malformed_json_body() {
    let server = api_server("http://127.0.0.1:9/enqueue", test_repository().await);

    let response = server
        .post("/enqueue")
        .content_type("application/json")
        .bytes(Bytes::from_static(b"{\"urls\": [\"https://example.com\""))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_enqueue_rejects_wrongly_shaped_body() {
    let server = api_server("http://127.0.0.1:9/enqueue", test_repository().await);

    let response = server
        .post("/enqueue")
        .json(&json!({ "urls": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert!(body["detail"].is_string());
}
