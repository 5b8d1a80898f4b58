// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::auth_dto::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};
use crate::domain::services::auth_service::AuthService;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::json::AppJson;
use crate::presentation::middleware::auth_middleware::bearer_token;
use crate::utils::errors::ServiceError;
use axum::{
    extract::Extension,
    http::{HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;
use validator::Validate;

/// 登录并签发访问令牌
///
/// 用户不存在、未激活或密码错误都返回 401
pub async fn login(
    Extension(service): Extension<Arc<AuthService>>,
    AppJson(request): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    request.validate().map_err(ServiceError::from)?;
    let (token, user) = service.login(&request.email, &request.password).await?;
    Ok(Json(LoginResponse::new(token, user)))
}

/// 注册新用户
///
/// 路由本身公开；携带 Bearer 令牌时解析出操作者，用于创建特权角色
pub async fn register(
    Extension(service): Extension<Arc<AuthService>>,
    headers: HeaderMap,
    AppJson(request): AppJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let actor = bearer_token(&headers)
        .map(|token| service.authenticate(token))
        .transpose()?;
    let user = service
        .register(actor.as_ref(), request.into_registration()?)
        .await?;
    Ok((StatusCode::CREATED, Json(RegisterResponse { id: user.id })))
}
