// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Router;
use axum_test::TestServer;
use metrics_exporter_prometheus::PrometheusBuilder;
use pagegrab::application::usecases::enqueue_batch::EnqueueGateway;
use pagegrab::config::settings::DatabaseSettings;
use pagegrab::engines::rate_limiter::RateLimiter;
use pagegrab::engines::reqwest_engine::ReqwestEngine;
use pagegrab::infrastructure::database::connection;
use pagegrab::infrastructure::repositories::page_result_repo_impl::PageResultRepositoryImpl;
use pagegrab::presentation::routes;
use pagegrab::workers::ScrapeWorker;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

pub const TEST_USER_AGENT: &str = "pagegrab-test/1.0";

/// 每个测试独立的内存数据库，已执行迁移
pub async fn test_repository() -> Arc<PageResultRepositoryImpl> {
    let settings = DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        max_connections: Some(1),
        min_connections: None,
        connect_timeout: None,
        idle_timeout: None,
    };
    let db = connection::connect_and_migrate(&settings)
        .await
        .expect("Failed to prepare test database");
    Arc::new(PageResultRepositoryImpl::new(Arc::new(db)))
}

/// 工作器路由，限速足够高以免拖慢测试
pub fn worker_app(repository: Arc<PageResultRepositoryImpl>) -> Router {
    let fetcher = Arc::new(
        ReqwestEngine::new(TEST_USER_AGENT, Duration::from_secs(5))
            .expect("Failed to build fetcher"),
    );
    let rate_limiter = Arc::new(RateLimiter::new(1000.0));
    routes::worker_routes(ScrapeWorker::new(fetcher, repository, rate_limiter))
}

pub fn worker_server(repository: Arc<PageResultRepositoryImpl>) -> TestServer {
    TestServer::new(worker_app(repository)).expect("Failed to start worker test server")
}

/// API 路由，转发目标为 `worker_url`
pub fn api_server(worker_url: &str, repository: Arc<PageResultRepositoryImpl>) -> TestServer {
    let gateway = Arc::new(
        EnqueueGateway::new(worker_url, Duration::from_secs(5)).expect("Failed to build gateway"),
    );
    let handle = PrometheusBuilder::new().build_recorder().handle();
    let app = routes::api_routes(gateway, repository, handle);
    TestServer::new(app).expect("Failed to start API test server")
}

/// 在真实端口上运行路由，返回监听地址
pub async fn spawn_app(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

pub fn html_page(title: &str, description: &str) -> String {
    format!(
        "<html><head><title>{}</title><meta name=\"description\" content=\"{}\"></head><body></body></html>",
        title, description
    )
}
