// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json};

use crate::application::dto::batch_request::UrlBatchDto;
use crate::application::dto::batch_response::BatchResultDto;
use crate::domain::repositories::page_result_repository::PageResultRepository;
use crate::engines::traits::PageFetcher;
use crate::presentation::extractors::json_body::JsonBody;
use crate::workers::ScrapeWorker;

/// 工作器批处理端点
///
/// 总是返回 200，单个 URL 的失败编码在结果的 `error` 字段中
pub async fn process_batch<F, R>(
    Extension(worker): Extension<ScrapeWorker<F, R>>,
    JsonBody(batch): JsonBody<UrlBatchDto>,
) -> Json<BatchResultDto>
where
    F: PageFetcher + 'static,
    R: PageResultRepository + 'static,
{
    let results = worker.scrape_batch(&batch.urls).await;
    Json(results.into())
}
