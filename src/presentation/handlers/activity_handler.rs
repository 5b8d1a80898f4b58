// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::activity_dto::{
    ActivityListResponse, CreateActivityRequest, UpdateActivityRequest,
};
use crate::domain::models::activity::Activity;
use crate::domain::services::activity_service::ActivityService;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::actor::CurrentActor;
use crate::presentation::extractors::json::AppJson;
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

pub async fn create_activity(
    Extension(service): Extension<Arc<ActivityService>>,
    CurrentActor(actor): CurrentActor,
    Path(lead_id): Path<String>,
    AppJson(request): AppJson<CreateActivityRequest>,
) -> Result<(StatusCode, Json<Activity>), AppError> {
    let (kind, summary) = request.into_parts()?;
    let activity = service.record(&actor, &lead_id, kind, summary).await?;
    Ok((StatusCode::CREATED, Json(activity)))
}

pub async fn list_activities(
    Extension(service): Extension<Arc<ActivityService>>,
    CurrentActor(_actor): CurrentActor,
    Path(lead_id): Path<String>,
) -> Result<Json<ActivityListResponse>, AppError> {
    let activities = service.list_for_lead(&lead_id).await?;
    Ok(Json(activities.into()))
}

/// 修改活动摘要，仅限记录者本人
pub async fn update_activity(
    Extension(service): Extension<Arc<ActivityService>>,
    CurrentActor(actor): CurrentActor,
    Path((_lead_id, activity_id)): Path<(String, String)>,
    AppJson(request): AppJson<UpdateActivityRequest>,
) -> Result<Json<Activity>, AppError> {
    let activity = service
        .update_summary(&actor, &activity_id, request.summary)
        .await?;
    Ok(Json(activity))
}

/// 删除活动，仅限记录者本人
pub async fn delete_activity(
    Extension(service): Extension<Arc<ActivityService>>,
    CurrentActor(actor): CurrentActor,
    Path((_lead_id, activity_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    service.delete(&actor, &activity_id).await?;
    Ok(StatusCode::OK)
}
