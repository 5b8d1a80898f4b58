// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::task_dto::{
    CreateTaskRequest, TaskListResponse, TaskResponse, TodayQueryParams, TodayTasksResponse,
    UpdateTaskRequest,
};
use crate::domain::services::task_lifecycle_service::TaskLifecycleService;
use crate::domain::services::today_work_service::TodayWorkService;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::actor::CurrentActor;
use crate::presentation::extractors::json::AppJson;
use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use std::sync::Arc;

/// 在线索下创建任务
pub async fn create_task(
    Extension(service): Extension<Arc<TaskLifecycleService>>,
    CurrentActor(_actor): CurrentActor,
    Path(lead_id): Path<String>,
    AppJson(request): AppJson<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), AppError> {
    let new_task = request.into_new_task()?;
    let task = service.create_task(&lead_id, new_task).await?;
    Ok((StatusCode::CREATED, Json(task.into())))
}

/// 列出线索下的任务
pub async fn list_tasks(
    Extension(service): Extension<Arc<TaskLifecycleService>>,
    CurrentActor(_actor): CurrentActor,
    Path(lead_id): Path<String>,
) -> Result<Json<TaskListResponse>, AppError> {
    let views = service.list_for_lead(&lead_id).await?;
    Ok(Json(views.into()))
}

/// 部分更新任务
///
/// 状态从非 done 变为 done 时，同一事务内记录一条完成活动
pub async fn update_task(
    Extension(service): Extension<Arc<TaskLifecycleService>>,
    CurrentActor(actor): CurrentActor,
    Path(task_id): Path<String>,
    AppJson(request): AppJson<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>, AppError> {
    let patch = request.into_patch()?;
    let task = service.update_task(&actor, &task_id, patch).await?;
    Ok(Json(task.into()))
}

/// 线索路径下的任务更新，线索ID仅作为路径的一部分
pub async fn update_lead_task(
    service: Extension<Arc<TaskLifecycleService>>,
    actor: CurrentActor,
    Path((_lead_id, task_id)): Path<(String, String)>,
    request: AppJson<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>, AppError> {
    update_task(service, actor, Path(task_id), request).await
}

pub async fn delete_task(
    Extension(service): Extension<Arc<TaskLifecycleService>>,
    CurrentActor(_actor): CurrentActor,
    Path(task_id): Path<String>,
) -> Result<StatusCode, AppError> {
    service.delete_task(&task_id).await?;
    Ok(StatusCode::OK)
}

pub async fn delete_lead_task(
    service: Extension<Arc<TaskLifecycleService>>,
    actor: CurrentActor,
    Path((_lead_id, task_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    delete_task(service, actor, Path(task_id)).await
}

/// 今日工作视图
///
/// 合并分配给目标用户的未完成任务与到期回访
pub async fn today(
    Extension(service): Extension<Arc<TodayWorkService>>,
    CurrentActor(actor): CurrentActor,
    Query(params): Query<TodayQueryParams>,
) -> Result<Json<TodayTasksResponse>, AppError> {
    let work = service
        .today(&actor, params.into(), Utc::now().fixed_offset())
        .await?;
    Ok(Json(work.into()))
}
