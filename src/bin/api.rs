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

use pagegrab::application::usecases::enqueue_batch::EnqueueGateway;
use pagegrab::config::settings::Settings;
use pagegrab::infrastructure::database::connection;
use pagegrab::infrastructure::metrics;
use pagegrab::infrastructure::repositories::page_result_repo_impl::PageResultRepositoryImpl;
use pagegrab::presentation::routes;
use pagegrab::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// API 进程入口
///
/// 接收 URL 批次并转发给工作器，提供结果查询和指标端点
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting pagegrab API...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Prometheus recorder, rendered on /metrics
    let metrics_handle = metrics::init_api_metrics()?;

    // 4. Connect to database and apply migrations
    let db = Arc::new(connection::connect_and_migrate(&settings.database).await?);
    info!("Database connection established");

    let repository = Arc::new(PageResultRepositoryImpl::new(db));
    let gateway = Arc::new(EnqueueGateway::from_settings(&settings.api)?);
    info!("Forwarding batches to {}", settings.api.worker_enqueue_url);

    // 5. Start HTTP server
    let app = routes::api_routes(gateway, repository, metrics_handle);

    let addr = format!("{}:{}", settings.api.host, settings.api.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("API listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
