// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page_result::StoredPageResult;
use serde::{Deserialize, Serialize};

/// 默认返回条数
pub const DEFAULT_RESULTS_LIMIT: u64 = 50;

/// 结果查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultsQueryDto {
    pub limit: Option<u64>,
}

impl ResultsQueryDto {
    pub fn limit(&self) -> u64 {
        self.limit.unwrap_or(DEFAULT_RESULTS_LIMIT)
    }
}

/// 结果查询响应
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResultsResponseDto {
    pub items: Vec<StoredPageResult>,
}
