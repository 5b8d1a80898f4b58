// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::user_dto::UserListResponse;
use crate::domain::services::auth_service::AuthService;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::actor::CurrentActor;
use axum::{extract::Extension, Json};
use std::sync::Arc;

pub async fn list_users(
    Extension(service): Extension<Arc<AuthService>>,
    CurrentActor(_actor): CurrentActor,
) -> Result<Json<UserListResponse>, AppError> {
    let users = service.list_users().await?;
    Ok(Json(users.into()))
}
