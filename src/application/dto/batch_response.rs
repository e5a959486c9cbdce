// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page_result::{PageResult, ScrapeOutcome};
use serde::{Deserialize, Serialize};

/// 入队响应
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EnqueueResponseDto {
    /// 转发的URL数量
    pub enqueued: usize,
    /// 转发的URL列表
    pub urls: Vec<String>,
}

/// 单个抓取结果
///
/// 领域层的二选一结局在这里展平为可选字段
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PageResultDto {
    pub url: String,
    pub status_code: Option<u16>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration_ms: u64,
    pub error: Option<String>,
}

impl From<PageResult> for PageResultDto {
    fn from(result: PageResult) -> Self {
        let (status_code, title, description, error) = match result.outcome {
            ScrapeOutcome::Success {
                status_code,
                title,
                description,
            } => (Some(status_code), title, description, None),
            ScrapeOutcome::Failure { error } => (None, None, None, Some(error)),
        };

        Self {
            url: result.url,
            status_code,
            title,
            description,
            duration_ms: result.duration_ms,
            error,
        }
    }
}

/// 工作器批处理响应
///
/// 总是以 200 返回，单个 URL 的失败体现在各自的 `error` 字段中
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BatchResultDto {
    pub processed: usize,
    pub results: Vec<PageResultDto>,
}

impl From<Vec<PageResult>> for BatchResultDto {
    fn from(results: Vec<PageResult>) -> Self {
        Self {
            processed: results.len(),
            results: results.into_iter().map(PageResultDto::from).collect(),
        }
    }
}
