// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{api_server, html_page, spawn_app, test_repository, worker_app};
use pagegrab::application::dto::results_query::ResultsResponseDto;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// API 转发到真实运行的工作器，结果可通过 `/results` 查询
#[tokio::test]
async fn test_enqueue_scrape_and_query_results() {
    let site = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/one"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(html_page("One", "first"), "text/html"),
        )
        .mount(&site)
        .await;
    Mock::given(method("GET"))
        .and(path("/two"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(html_page("Two", "second"), "text/html"),
        )
        .mount(&site)
        .await;

    let repository = test_repository().await;
    let worker_addr = spawn_app(worker_app(repository.clone())).await;
    let api = api_server(&format!("http://{}/enqueue", worker_addr), repository);

    let one = format!("{}/one", site.uri());
    let two = format!("{}/two", site.uri());
    let response = api
        .post("/enqueue")
        .json(&json!({ "urls": [one, two] }))
        .await;
    response.assert_status_ok();

    // Forwarding is synchronous, so both rows exist once the call returns
    let results: ResultsResponseDto = api.get("/results").await.json();
    assert_eq!(results.items.len(), 2);
    assert_eq!(results.items[0].url, two);
    assert_eq!(results.items[0].title.as_deref(), Some("Two"));
    assert_eq!(results.items[1].url, one);
    assert_eq!(results.items[1].description.as_deref(), Some("first"));
}
