// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::{describe_counter, describe_histogram};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};
use std::net::SocketAddr;
use tracing::info;

// Worker metrics
pub const SCRAPE_TOTAL: &str = "scrape_total";
pub const SCRAPE_SUCCESS_TOTAL: &str = "scrape_success_total";
pub const SCRAPE_FAIL_TOTAL: &str = "scrape_fail_total";
pub const SCRAPE_PERSIST_FAIL_TOTAL: &str = "scrape_persist_fail_total";
pub const SCRAPE_LATENCY_SECONDS: &str = "scrape_latency_seconds";
pub const RATE_LIMITER_WAIT_SECONDS: &str = "rate_limiter_wait_seconds";

// API metrics
pub const API_REQUESTS_TOTAL: &str = "api_requests_total";
pub const QUEUE_JOBS_TOTAL: &str = "queue_jobs_total";
pub const API_REQUEST_LATENCY_SECONDS: &str = "api_request_latency_seconds";

/// Prometheus 客户端默认的直方图桶
const LATENCY_BUCKETS: &[f64] = &[
    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
];

/// 创建 Prometheus 构建器
///
/// 以 `_seconds` 结尾的指标导出为直方图而不是摘要
pub fn prometheus_builder() -> Result<PrometheusBuilder, BuildError> {
    PrometheusBuilder::new()
        .set_buckets_for_metric(Matcher::Suffix("_seconds".to_string()), LATENCY_BUCKETS)
}

/// 初始化工作器指标
///
/// 在独立端口上启动 Prometheus HTTP 监听器，供外部监控系统抓取
pub fn init_worker_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    prometheus_builder()?.with_http_listener(addr).install()?;
    describe_worker_metrics();
    info!("Metrics exporter listening on {}", addr);
    Ok(())
}

/// 初始化 API 指标
///
/// 安装全局记录器并返回句柄，由 `/metrics` 端点渲染
pub fn init_api_metrics() -> Result<PrometheusHandle, BuildError> {
    let handle = prometheus_builder()?.install_recorder()?;
    describe_api_metrics();
    Ok(handle)
}

pub fn describe_worker_metrics() {
    describe_counter!(SCRAPE_TOTAL, "Total number of scrape attempts");
    describe_counter!(SCRAPE_SUCCESS_TOTAL, "Total number of successful scrapes");
    describe_counter!(SCRAPE_FAIL_TOTAL, "Total number of failed scrapes");
    describe_counter!(
        SCRAPE_PERSIST_FAIL_TOTAL,
        "Total number of scrape results that could not be persisted"
    );
    describe_histogram!(SCRAPE_LATENCY_SECONDS, "Latency of a single scrape attempt");
    describe_histogram!(
        RATE_LIMITER_WAIT_SECONDS,
        "Time spent waiting at the per-process rate limiter"
    );
}

pub fn describe_api_metrics() {
    describe_counter!(API_REQUESTS_TOTAL, "Total number of API requests");
    describe_counter!(QUEUE_JOBS_TOTAL, "Total number of URLs enqueued");
    describe_histogram!(API_REQUEST_LATENCY_SECONDS, "Latency of API requests");
}

/// 从 Prometheus 文本中读取计数器的值（所有标签组合求和）
///
/// 未出现的指标返回 `None`
#[cfg(test)]
pub(crate) fn counter_value(rendered: &str, name: &str) -> Option<f64> {
    let values: Vec<f64> = rendered
        .lines()
        .filter(|line| !line.starts_with('#'))
        .filter_map(|line| {
            let (series, value) = line.rsplit_once(' ')?;
            let metric = series.split('{').next()?;
            (metric == name).then(|| value.parse::<f64>().ok()).flatten()
        })
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.iter().sum())
    }
}
