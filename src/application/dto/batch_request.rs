// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// URL 批次请求
///
/// API 的 `/enqueue` 和工作器的 `/enqueue` 使用同一结构，API 原样转发
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UrlBatchDto {
    /// 要抓取的URL列表
    pub urls: Vec<String>,
}
