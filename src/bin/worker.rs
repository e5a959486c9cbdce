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

use pagegrab::config::settings::Settings;
use pagegrab::engines::rate_limiter::RateLimiter;
use pagegrab::engines::reqwest_engine::ReqwestEngine;
use pagegrab::infrastructure::database::connection;
use pagegrab::infrastructure::metrics;
use pagegrab::infrastructure::repositories::page_result_repo_impl::PageResultRepositoryImpl;
use pagegrab::presentation::routes;
use pagegrab::utils::telemetry;
use pagegrab::workers::ScrapeWorker;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 工作器进程入口
///
/// 限速抓取 URL 批次，持久化结果，并在独立端口暴露指标
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting pagegrab worker...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Metrics listener on its own port
    let metrics_addr: SocketAddr =
        format!("{}:{}", settings.worker.host, settings.worker.metrics_port).parse()?;
    metrics::init_worker_metrics(metrics_addr)?;

    // 4. Connect to database and apply migrations
    let db = Arc::new(connection::connect_and_migrate(&settings.database).await?);
    info!("Database connection established");

    // 5. Assemble worker
    let fetcher = Arc::new(ReqwestEngine::from_settings(&settings.worker)?);
    let repository = Arc::new(PageResultRepositoryImpl::new(db));
    let rate_limiter = Arc::new(RateLimiter::new(settings.worker.rate_limit_per_second));
    info!(
        "Rate limiter initialized at {} req/s",
        settings.worker.rate_limit_per_second
    );
    let worker = ScrapeWorker::new(fetcher, repository, rate_limiter);

    // 6. Start HTTP server
    let app = routes::worker_routes(worker);

    let addr = format!("{}:{}", settings.worker.host, settings.worker.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Worker listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
