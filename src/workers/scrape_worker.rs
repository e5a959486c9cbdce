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

use metrics::{counter, histogram};
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{error, info, instrument};

use crate::domain::models::page_result::PageResult;
use crate::domain::repositories::page_result_repository::PageResultRepository;
use crate::domain::services::extraction_service::ExtractionService;
use crate::engines::rate_limiter::RateLimiter;
use crate::engines::traits::PageFetcher;
use crate::infrastructure::metrics::{
    SCRAPE_FAIL_TOTAL, SCRAPE_LATENCY_SECONDS, SCRAPE_PERSIST_FAIL_TOTAL, SCRAPE_SUCCESS_TOTAL,
    SCRAPE_TOTAL,
};
use crate::utils::errors::RepositoryError;

/// 持久化结果
///
/// 写入失败不会中止抓取尝试：结果仍然返回给调用方，计数器照常更新，
/// 只是这一行没有落库（已知的持久性缺口）。
#[derive(Debug)]
pub enum Persistence {
    /// 已写入，附带存储端分配的行ID
    Stored(i32),
    /// 写入失败，错误已记录日志并被吞掉
    Dropped(RepositoryError),
}

/// 抓取工作器
///
/// 每个工作器进程持有一个实例，限流器在所有抓取调用间共享。
pub struct ScrapeWorker<F, R>
where
    F: PageFetcher,
    R: PageResultRepository,
{
    fetcher: Arc<F>,
    repository: Arc<R>,
    rate_limiter: Arc<RateLimiter>,
}

impl<F, R> Clone for ScrapeWorker<F, R>
where
    F: PageFetcher,
    R: PageResultRepository,
{
    fn clone(&self) -> Self {
        Self {
            fetcher: self.fetcher.clone(),
            repository: self.repository.clone(),
            rate_limiter: self.rate_limiter.clone(),
        }
    }
}

impl<F, R> ScrapeWorker<F, R>
where
    F: PageFetcher,
    R: PageResultRepository,
{
    /// 创建新的抓取工作器实例
    pub fn new(fetcher: Arc<F>, repository: Arc<R>, rate_limiter: Arc<RateLimiter>) -> Self {
        Self {
            fetcher,
            repository,
            rate_limiter,
        }
    }

    /// 按提交顺序逐个抓取批次中的 URL
    ///
    /// 不做批内并发；单个 URL 的失败只体现在它自己的结果中，不影响其它 URL。
    pub async fn scrape_batch(&self, urls: &[String]) -> Vec<PageResult> {
        let mut results = Vec::with_capacity(urls.len());
        for url in urls {
            info!("Processing URL: {}", url);
            results.push(self.scrape_one(url).await);
        }
        results
    }

    /// 抓取单个 URL 并记录结果
    #[instrument(skip(self))]
    pub async fn scrape_one(&self, url: &str) -> PageResult {
        counter!(SCRAPE_TOTAL).increment(1);

        // Duration covers the wait at the limiter as well as the fetch
        let start = Instant::now();
        self.rate_limiter.throttle().await;

        let result = match self.fetcher.fetch(url).await {
            Ok(page) => {
                let duration_ms = start.elapsed().as_millis() as u64;
                let metadata = ExtractionService::extract(&page.content_type, &page.body);
                counter!(SCRAPE_SUCCESS_TOTAL).increment(1);
                PageResult::success(
                    url,
                    page.status_code,
                    metadata.title,
                    metadata.description,
                    duration_ms,
                )
            }
            Err(e) => {
                let duration_ms = start.elapsed().as_millis() as u64;
                counter!(SCRAPE_FAIL_TOTAL).increment(1);
                PageResult::failure(url, e.to_string(), duration_ms)
            }
        };

        histogram!(SCRAPE_LATENCY_SECONDS).record(start.elapsed().as_secs_f64());
        self.persist(&result).await;
        result
    }

    /// 写入结果行，失败时记录日志并继续
    pub async fn persist(&self, result: &PageResult) -> Persistence {
        match self.repository.save(result).await {
            Ok(id) => Persistence::Stored(id),
            Err(e) => {
                error!(url = %result.url, error = %e, "Failed to store page result in database");
                counter!(SCRAPE_PERSIST_FAIL_TOTAL).increment(1);
                Persistence::Dropped(e)
            }
        }
    }
}

#[cfg(test)]
#[path = "scrape_worker_test.rs"]
mod tests;
