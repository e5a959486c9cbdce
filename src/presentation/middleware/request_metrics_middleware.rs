// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use metrics::{counter, histogram};

use crate::infrastructure::metrics::{API_REQUESTS_TOTAL, API_REQUEST_LATENCY_SECONDS};

/// 记录 API 请求计数和延迟
///
/// 按匹配到的路由模板、方法和状态码打标签，需通过 `route_layer` 挂载
pub async fn request_metrics_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| request.uri().path().to_owned());
    let method = request.method().to_string();

    let response = next.run(request).await;

    let status = response.status().as_u16().to_string();
    counter!(API_REQUESTS_TOTAL, "path" => path, "method" => method, "status" => status)
        .increment(1);
    histogram!(API_REQUEST_LATENCY_SECONDS).record(start.elapsed().as_secs_f64());

    response
}
