// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::domain::repositories::task_repository::RepositoryError;
use crate::infrastructure::auth::jwt::JwtError;
use crate::utils::errors::ServiceError;

const INTERNAL_MESSAGE: &str = "internal server error";

/// HTTP 边界上的统一错误
///
/// 包装任意错误，按 `ServiceError`、`RepositoryError`、`JwtError` 依次向下转型以确定状态码。
/// 500 响应只返回通用消息，详细原因写入日志。
#[derive(Debug)]
pub struct AppError(anyhow::Error);

fn repository_status(err: &RepositoryError) -> (StatusCode, Option<String>) {
    match err {
        RepositoryError::NotFound => (StatusCode::NOT_FOUND, Some("not found".to_string())),
        RepositoryError::Conflict(msg) => (StatusCode::CONFLICT, Some(msg.clone())),
        RepositoryError::Database(_) | RepositoryError::InvalidData(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, None)
        }
    }
}

impl AppError {
    /// 状态码与对客户端可见的消息，`None` 表示使用通用内部错误消息
    fn classify(&self) -> (StatusCode, Option<String>) {
        if let Some(err) = self.0.downcast_ref::<ServiceError>() {
            return match err {
                ServiceError::Validation(_) => (StatusCode::BAD_REQUEST, Some(err.to_string())),
                ServiceError::Unauthorized => (StatusCode::UNAUTHORIZED, Some(err.to_string())),
                ServiceError::Forbidden => (StatusCode::FORBIDDEN, Some(err.to_string())),
                ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, Some(err.to_string())),
                ServiceError::Conflict(_) => (StatusCode::CONFLICT, Some(err.to_string())),
                ServiceError::Repository(inner) => repository_status(inner),
                ServiceError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, None),
            };
        }
        if let Some(err) = self.0.downcast_ref::<RepositoryError>() {
            return repository_status(err);
        }
        if self.0.downcast_ref::<JwtError>().is_some() {
            return (StatusCode::UNAUTHORIZED, Some("unauthorized".to_string()));
        }
        (StatusCode::INTERNAL_SERVER_ERROR, None)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.classify();

        let message = message.unwrap_or_else(|| {
            error!(error = ?self.0, "Request failed with internal error");
            INTERNAL_MESSAGE.to_string()
        });

        let body = Json(json!({ "error": message }));
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
