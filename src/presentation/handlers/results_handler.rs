// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json, Query};
use std::sync::Arc;

use crate::application::dto::results_query::{ResultsQueryDto, ResultsResponseDto};
use crate::domain::repositories::page_result_repository::PageResultRepository;
use crate::presentation::errors::AppError;

/// 查询最近的抓取结果，按抓取时间倒序
pub async fn list_results<R>(
    Extension(repository): Extension<Arc<R>>,
    Query(query): Query<ResultsQueryDto>,
) -> Result<Json<ResultsResponseDto>, AppError>
where
    R: PageResultRepository + 'static,
{
    let items = repository.find_recent(query.limit()).await?;
    Ok(Json(ResultsResponseDto { items }))
}
