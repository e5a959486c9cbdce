// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;
use url::Url;

/// URL 校验错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlBatchError {
    #[error("invalid url at index {index}: {url:?}: {reason}")]
    InvalidUrl {
        index: usize,
        url: String,
        reason: String,
    },
}

/// URL 批次
///
/// 请求范围内的有序 URL 列表，不持久化。
/// 只能通过 [`UrlBatch::parse`] 构造，因此其中每个元素都是带主机的 HTTP/HTTPS 绝对地址。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBatch {
    urls: Vec<Url>,
}

impl UrlBatch {
    /// 校验并构造批次
    ///
    /// 任何一个元素不合法都会使整个批次被拒绝。
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Result<Self, UrlBatchError> {
        let urls = raw
            .iter()
            .enumerate()
            .map(|(index, s)| parse_http_url(s.as_ref()).map_err(|reason| UrlBatchError::InvalidUrl {
                index,
                url: s.as_ref().to_string(),
                reason,
            }))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { urls })
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// 规范化后的 URL 字符串，保持提交顺序
    pub fn to_strings(&self) -> Vec<String> {
        self.urls.iter().map(|u| u.to_string()).collect()
    }
}

fn parse_http_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw.trim()).map_err(|e| e.to_string())?;

    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("unsupported scheme '{}'", other)),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err("missing host".to_string());
    }

    Ok(url)
}
