// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 标题最大长度（字符）
pub const MAX_TITLE_CHARS: usize = 500;
/// 描述最大长度（字符）
pub const MAX_DESCRIPTION_CHARS: usize = 1000;
/// 错误信息最大长度（字符）
pub const MAX_ERROR_CHARS: usize = 500;

/// 抓取结局
///
/// 一次抓取尝试要么得到了完整的 HTTP 响应，要么在此之前失败。
/// 两者互斥，因此不可能构造出状态码和错误同时存在（或同时缺失）的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrapeOutcome {
    /// 完成了一次 HTTP 事务（任何状态码，包括 4xx/5xx）
    Success {
        status_code: u16,
        title: Option<String>,
        description: Option<String>,
    },
    /// 在得到可用响应前失败（超时、DNS、连接拒绝、TLS 等）
    Failure { error: String },
}

/// 抓取结果
///
/// 一次抓取尝试在内存中的结果，由抓取工作器生成并交给结果仓库持久化。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    /// 请求的URL
    pub url: String,
    /// 抓取结局
    pub outcome: ScrapeOutcome,
    /// 从抓取开始到结局确定的耗时（毫秒）
    pub duration_ms: u64,
}

impl PageResult {
    pub fn success(
        url: impl Into<String>,
        status_code: u16,
        title: Option<String>,
        description: Option<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            url: url.into(),
            outcome: ScrapeOutcome::Success {
                status_code,
                title,
                description,
            },
            duration_ms,
        }
    }

    pub fn failure(url: impl Into<String>, error: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            url: url.into(),
            outcome: ScrapeOutcome::Failure {
                error: error.into(),
            },
            duration_ms,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ScrapeOutcome::Success { .. })
    }

    pub fn status_code(&self) -> Option<u16> {
        match &self.outcome {
            ScrapeOutcome::Success { status_code, .. } => Some(*status_code),
            ScrapeOutcome::Failure { .. } => None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        match &self.outcome {
            ScrapeOutcome::Success { title, .. } => title.as_deref(),
            ScrapeOutcome::Failure { .. } => None,
        }
    }

    pub fn description(&self) -> Option<&str> {
        match &self.outcome {
            ScrapeOutcome::Success { description, .. } => description.as_deref(),
            ScrapeOutcome::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            ScrapeOutcome::Success { .. } => None,
            ScrapeOutcome::Failure { error } => Some(error),
        }
    }
}

/// 已持久化的抓取结果行
///
/// 行一旦写入即不可变，`id` 和 `fetched_at` 由存储端分配。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredPageResult {
    pub id: i32,
    pub url: String,
    pub status_code: Option<i32>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration_ms: i64,
    pub error: Option<String>,
    pub fetched_at: DateTime<Utc>,
}
