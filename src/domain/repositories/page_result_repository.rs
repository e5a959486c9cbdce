// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::page_result::{PageResult, StoredPageResult};
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;

/// 抓取结果仓库特质
///
/// 只追加：每次调用 `save` 写入一条新行，不存在更新或删除路径。
/// 多个工作器进程可以并发写入，插入的并发安全由存储端负责。
#[async_trait]
pub trait PageResultRepository: Send + Sync {
    /// 保存抓取结果，返回存储端分配的行ID
    async fn save(&self, result: &PageResult) -> Result<i32, RepositoryError>;

    /// 按抓取时间倒序返回最近的结果
    async fn find_recent(&self, limit: u64) -> Result<Vec<StoredPageResult>, RepositoryError>;
}
