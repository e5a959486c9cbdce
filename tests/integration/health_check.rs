// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::helpers::{api_server, test_repository, worker_server};
use serde_json::json;

/// 健康检查测试
///
/// 验证 API 健康检查端点返回静态存活响应
#[tokio::test]
async fn api_health_check_works() {
    let server = api_server("http://127.0.0.1:9/enqueue", test_repository().await);

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "ok": true }));
}

#[tokio::test]
async fn worker_health_check_works() {
    let server = worker_server(test_repository().await);

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({ "status": "healthy", "service": "scraper-worker" }));
}

#[tokio::test]
async fn api_metrics_endpoint_serves_text() {
    let server = api_server("http://127.0.0.1:9/enqueue", test_repository().await);

    let response = server.get("/metrics").await;

    response.assert_status_ok();
    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/plain"));
}
