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

use crate::domain::models::page_result::{PageResult, ScrapeOutcome, StoredPageResult};
use crate::domain::repositories::page_result_repository::PageResultRepository;
use crate::infrastructure::database::entities::page_result as page_result_entity;
use crate::utils::errors::RepositoryError;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 抓取结果仓库实现
pub struct PageResultRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl PageResultRepositoryImpl {
    /// 创建新的抓取结果仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<&PageResult> for page_result_entity::ActiveModel {
    fn from(result: &PageResult) -> Self {
        let (status_code, title, description, error) = match &result.outcome {
            ScrapeOutcome::Success {
                status_code,
                title,
                description,
            } => (
                Some(*status_code as i32),
                title.clone(),
                description.clone(),
                None,
            ),
            ScrapeOutcome::Failure { error } => (None, None, None, Some(error.clone())),
        };

        page_result_entity::ActiveModel {
            id: NotSet,
            url: Set(result.url.clone()),
            status_code: Set(status_code),
            title: Set(title),
            description: Set(description),
            duration_ms: Set(i64::try_from(result.duration_ms).unwrap_or(i64::MAX)),
            error: Set(error),
            // Stamped by the column default at insert time
            fetched_at: NotSet,
        }
    }
}

impl From<page_result_entity::Model> for StoredPageResult {
    fn from(m: page_result_entity::Model) -> Self {
        StoredPageResult {
            id: m.id,
            url: m.url,
            status_code: m.status_code,
            title: m.title,
            description: m.description,
            duration_ms: m.duration_ms,
            error: m.error,
            fetched_at: m.fetched_at.into(),
        }
    }
}

#[async_trait]
impl PageResultRepository for PageResultRepositoryImpl {
    async fn save(&self, result: &PageResult) -> Result<i32, RepositoryError> {
        let active_model = page_result_entity::ActiveModel::from(result);

        let inserted = page_result_entity::Entity::insert(active_model)
            .exec(self.db.as_ref())
            .await?;

        Ok(inserted.last_insert_id)
    }

    async fn find_recent(&self, limit: u64) -> Result<Vec<StoredPageResult>, RepositoryError> {
        let models = page_result_entity::Entity::find()
            .order_by_desc(page_result_entity::Column::FetchedAt)
            .order_by_desc(page_result_entity::Column::Id)
            .limit(limit)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(StoredPageResult::from).collect())
    }
}

#[cfg(test)]
#[path = "page_result_repo_impl_test.rs"]
mod tests;
