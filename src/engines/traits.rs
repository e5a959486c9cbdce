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

use crate::domain::models::page_result::MAX_ERROR_CHARS;
use crate::utils::text_processing::truncate_chars;
use async_trait::async_trait;
use thiserror::Error;

/// 抓取错误类型
///
/// 只表示传输层失败；任何完成的 HTTP 事务（包括 4xx/5xx）都不是错误。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// 传输失败（超时、DNS、连接拒绝、TLS 等），信息已截断
    #[error("{0}")]
    Transport(String),
}

impl FetchError {
    /// 从任意错误描述构造，截断到 500 个字符
    pub fn transport(message: impl AsRef<str>) -> Self {
        FetchError::Transport(truncate_chars(message.as_ref(), MAX_ERROR_CHARS))
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        // Include the source chain, reqwest's top-level message alone hides the cause
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        FetchError::transport(message)
    }
}

/// 抓取响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// HTTP状态码
    pub status_code: u16,
    /// 内容类型，缺失时为空字符串
    pub content_type: String,
    /// 响应内容
    pub body: String,
}

/// 页面抓取特质
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 对 URL 发起一次 GET 请求
    async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}
