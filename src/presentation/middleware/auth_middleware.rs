// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::auth::jwt::JwtManager;
use crate::presentation::errors::AppError;
use crate::utils::errors::ServiceError;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// 从请求头中取出 Bearer 令牌，缺失或为空时返回 `None`
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// 认证中间件
///
/// 校验 `Authorization: Bearer <jwt>` 请求头，成功后把解析出的 `Actor`
/// 注入请求扩展，失败时返回 401。
///
/// # 参数
///
/// * `jwt` - 令牌管理器
/// * `req` - 当前请求
/// * `next` - 下一个处理器
pub async fn auth_middleware(
    State(jwt): State<Arc<JwtManager>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let path = req.uri().path().to_string();
    debug!("AuthMiddleware processing path: {}", path);

    let token = bearer_token(req.headers()).ok_or(ServiceError::Unauthorized)?;

    match jwt.verify(token) {
        Ok(actor) => {
            debug!(user_id = %actor.id, role = %actor.role, "Request authenticated");
            req.extensions_mut().insert(actor);
            Ok(next.run(req).await)
        }
        Err(e) => {
            warn!(path = %path, "Rejected bearer token: {}", e);
            Err(ServiceError::Unauthorized.into())
        }
    }
}
