// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::time::Duration;

use metrics::counter;
use thiserror::Error;
use tracing::{error, info};

use crate::application::dto::batch_request::UrlBatchDto;
use crate::application::dto::batch_response::EnqueueResponseDto;
use crate::config::settings::ApiSettings;
use crate::domain::models::url_batch::{UrlBatch, UrlBatchError};
use crate::infrastructure::metrics::QUEUE_JOBS_TOTAL;

// === Section: Errors ===

/// 入队错误类型
#[derive(Error, Debug)]
pub enum EnqueueError {
    /// 批次中存在非法 URL，整个批次在任何副作用之前被拒绝
    #[error(transparent)]
    Validation(#[from] UrlBatchError),
    /// 转发失败：传输错误或工作器返回非 2xx
    #[error("{0}")]
    Upstream(String),
}

// === Section: Use Case Definition ===

/// 入队回执
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnqueueReceipt {
    pub count: usize,
    pub urls: Vec<String>,
}

impl From<EnqueueReceipt> for EnqueueResponseDto {
    fn from(receipt: EnqueueReceipt) -> Self {
        Self {
            enqueued: receipt.count,
            urls: receipt.urls,
        }
    }
}

/// 入队网关
///
/// 校验 URL 批次并同步转发到工作器的批处理端点。
/// 这里没有持久队列：转发调用返回时工作器已经处理完整个批次。
pub struct EnqueueGateway {
    client: reqwest::Client,
    worker_url: String,
}

// === Section: Implementation ===

impl EnqueueGateway {
    pub fn new(worker_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            worker_url: worker_url.into(),
        })
    }

    pub fn from_settings(settings: &ApiSettings) -> Result<Self, reqwest::Error> {
        Self::new(settings.worker_enqueue_url.clone(), settings.forward_timeout())
    }

    /// 校验并转发批次
    ///
    /// 只关心转发调用本身的成败，不解析工作器返回的逐 URL 结果。
    pub async fn enqueue(&self, urls: &[String]) -> Result<EnqueueReceipt, EnqueueError> {
        let batch = UrlBatch::parse(urls)?;
        let payload = UrlBatchDto {
            urls: batch.to_strings(),
        };

        self.forward(&payload).await.map_err(|e| {
            error!(worker_url = %self.worker_url, error = %e, "Failed to forward batch to worker");
            e
        })?;

        info!("Successfully processed URLs: {:?}", payload.urls);
        counter!(QUEUE_JOBS_TOTAL).increment(batch.len() as u64);

        Ok(EnqueueReceipt {
            count: batch.len(),
            urls: payload.urls,
        })
    }

    async fn forward(&self, payload: &UrlBatchDto) -> Result<(), EnqueueError> {
        let response = self
            .client
            .post(&self.worker_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| EnqueueError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            return Err(EnqueueError::Upstream(format!(
                "worker responded with status {}",
                response.status()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "enqueue_batch_test.rs"]
mod tests;
