// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::{Extension, Json};
use std::sync::Arc;

use crate::application::dto::batch_request::UrlBatchDto;
use crate::application::dto::batch_response::EnqueueResponseDto;
use crate::application::usecases::enqueue_batch::EnqueueGateway;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::json_body::JsonBody;

/// 提交 URL 批次
///
/// 请求体或 URL 校验失败返回 422，转发失败返回 500，成功返回转发的 URL
pub async fn enqueue(
    Extension(gateway): Extension<Arc<EnqueueGateway>>,
    JsonBody(payload): JsonBody<UrlBatchDto>,
) -> Result<Json<EnqueueResponseDto>, AppError> {
    let receipt = gateway.enqueue(&payload.urls).await?;
    Ok(Json(receipt.into()))
}
