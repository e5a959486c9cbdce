// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::usecases::enqueue_batch::EnqueueError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，响应体统一为 `{"detail": "..."}`
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    fn status(&self) -> StatusCode {
        if self.0.downcast_ref::<JsonRejection>().is_some() {
            return StatusCode::UNPROCESSABLE_ENTITY;
        }
        match self.0.downcast_ref::<EnqueueError>() {
            Some(EnqueueError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Some(EnqueueError::Upstream(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "detail": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
