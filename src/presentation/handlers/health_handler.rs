// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Json;
use serde_json::{json, Value};

/// API 健康检查端点
///
/// 静态存活响应，不检查依赖
pub async fn api_health() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// 工作器健康检查端点
pub async fn worker_health() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": "scraper-worker" }))
}
