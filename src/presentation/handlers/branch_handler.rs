// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::branch_dto::{BranchListResponse, CreateBranchRequest};
use crate::domain::models::branch::Branch;
use crate::domain::services::branch_service::BranchService;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::actor::CurrentActor;
use crate::presentation::extractors::json::AppJson;
use crate::utils::errors::ServiceError;
use axum::{extract::Extension, http::StatusCode, Json};
use std::sync::Arc;
use validator::Validate;

pub async fn list_branches(
    Extension(service): Extension<Arc<BranchService>>,
    CurrentActor(_actor): CurrentActor,
) -> Result<Json<BranchListResponse>, AppError> {
    Ok(Json(service.list().await?.into()))
}

/// 创建分支，仅限管理员
pub async fn create_branch(
    Extension(service): Extension<Arc<BranchService>>,
    CurrentActor(actor): CurrentActor,
    AppJson(request): AppJson<CreateBranchRequest>,
) -> Result<(StatusCode, Json<Branch>), AppError> {
    request.validate().map_err(ServiceError::from)?;
    let branch = service.create(&actor, request.name).await?;
    Ok((StatusCode::CREATED, Json(branch)))
}
