// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::usecases::enqueue_batch::EnqueueGateway;
use crate::domain::repositories::page_result_repository::PageResultRepository;
use crate::engines::traits::PageFetcher;
use crate::presentation::handlers::{
    batch_handler, enqueue_handler, health_handler, metrics_handler, results_handler,
};
use crate::presentation::middleware::request_metrics_middleware::request_metrics_middleware;
use crate::workers::ScrapeWorker;
use axum::{
    middleware,
    routing::{get, post},
    Extension, Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建 API 进程路由
///
/// # 返回值
///
/// 返回配置好的路由
pub fn api_routes<R>(
    gateway: Arc<EnqueueGateway>,
    repository: Arc<R>,
    metrics_handle: PrometheusHandle,
) -> Router
where
    R: PageResultRepository + 'static,
{
    Router::new()
        .route("/health", get(health_handler::api_health))
        .route("/enqueue", post(enqueue_handler::enqueue))
        .route("/results", get(results_handler::list_results::<R>))
        .route("/metrics", get(metrics_handler::metrics))
        .route_layer(middleware::from_fn(request_metrics_middleware))
        .layer(Extension(gateway))
        .layer(Extension(repository))
        .layer(Extension(metrics_handle))
        .layer(TraceLayer::new_for_http())
}

/// 创建工作器进程路由
pub fn worker_routes<F, R>(worker: ScrapeWorker<F, R>) -> Router
where
    F: PageFetcher + 'static,
    R: PageResultRepository + 'static,
{
    Router::new()
        .route("/health", get(health_handler::worker_health))
        .route("/enqueue", post(batch_handler::process_batch::<F, R>))
        .layer(Extension(worker))
        .layer(TraceLayer::new_for_http())
}
