// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::lead_dto::{CreateLeadRequest, LeadListQuery, UpdateLeadRequest};
use crate::domain::models::lead::Lead;
use crate::domain::services::lead_service::LeadService;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::actor::CurrentActor;
use crate::presentation::extractors::json::AppJson;
use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

pub async fn create_lead(
    Extension(service): Extension<Arc<LeadService>>,
    CurrentActor(_actor): CurrentActor,
    AppJson(request): AppJson<CreateLeadRequest>,
) -> Result<(StatusCode, Json<Lead>), AppError> {
    let lead = service.create(request.into_new_lead()?).await?;
    Ok((StatusCode::CREATED, Json(lead)))
}

/// 按过滤条件分页列出线索
///
/// 日期参数格式错误时返回 400
pub async fn list_leads(
    Extension(service): Extension<Arc<LeadService>>,
    CurrentActor(_actor): CurrentActor,
    Query(query): Query<LeadListQuery>,
) -> Result<Json<Vec<Lead>>, AppError> {
    let filter = query.into_filter()?;
    Ok(Json(service.list(&filter).await?))
}

pub async fn get_lead(
    Extension(service): Extension<Arc<LeadService>>,
    CurrentActor(_actor): CurrentActor,
    Path(id): Path<String>,
) -> Result<Json<Lead>, AppError> {
    Ok(Json(service.get(&id).await?))
}

pub async fn update_lead(
    Extension(service): Extension<Arc<LeadService>>,
    CurrentActor(_actor): CurrentActor,
    Path(id): Path<String>,
    AppJson(request): AppJson<UpdateLeadRequest>,
) -> Result<Json<Lead>, AppError> {
    let lead = service.update(&id, request.into_patch()?).await?;
    Ok(Json(lead))
}

pub async fn delete_lead(
    Extension(service): Extension<Arc<LeadService>>,
    CurrentActor(_actor): CurrentActor,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
