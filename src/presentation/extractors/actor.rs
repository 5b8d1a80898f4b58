// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::domain::models::user::Actor;
use crate::presentation::errors::AppError;
use crate::utils::errors::ServiceError;

/// 当前请求的操作者
///
/// 读取认证中间件注入的 `Actor` 扩展，缺失时返回 401
#[derive(Debug, Clone)]
pub struct CurrentActor(pub Actor);

impl<S> FromRequestParts<S> for CurrentActor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Actor>()
            .cloned()
            .map(CurrentActor)
            .ok_or_else(|| ServiceError::Unauthorized.into())
    }
}
