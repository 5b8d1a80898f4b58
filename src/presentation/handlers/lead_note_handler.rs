// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::lead_note_dto::{LeadNoteListResponse, LeadNoteRequest};
use crate::domain::models::lead_note::LeadNote;
use crate::domain::services::lead_note_service::LeadNoteService;
use crate::presentation::errors::AppError;
use crate::presentation::extractors::actor::CurrentActor;
use crate::presentation::extractors::json::AppJson;
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use crate::utils::errors::ServiceError;
use validator::Validate;

pub async fn create_note(
    Extension(service): Extension<Arc<LeadNoteService>>,
    CurrentActor(actor): CurrentActor,
    Path(lead_id): Path<String>,
    AppJson(request): AppJson<LeadNoteRequest>,
) -> Result<(StatusCode, Json<LeadNote>), AppError> {
    request.validate().map_err(ServiceError::from)?;
    let note = service.create(&actor, &lead_id, request.body).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

pub async fn list_notes(
    Extension(service): Extension<Arc<LeadNoteService>>,
    CurrentActor(_actor): CurrentActor,
    Path(lead_id): Path<String>,
) -> Result<Json<LeadNoteListResponse>, AppError> {
    let notes = service.list_for_lead(&lead_id).await?;
    Ok(Json(notes.into()))
}

/// 修改备注，仅限作者本人
pub async fn update_note(
    Extension(service): Extension<Arc<LeadNoteService>>,
    CurrentActor(actor): CurrentActor,
    Path((_lead_id, note_id)): Path<(String, String)>,
    AppJson(request): AppJson<LeadNoteRequest>,
) -> Result<Json<LeadNote>, AppError> {
    request.validate().map_err(ServiceError::from)?;
    let note = service.update(&actor, &note_id, request.body).await?;
    Ok(Json(note))
}

/// 删除备注，仅限作者本人
pub async fn delete_note(
    Extension(service): Extension<Arc<LeadNoteService>>,
    CurrentActor(actor): CurrentActor,
    Path((_lead_id, note_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    service.delete(&actor, &note_id).await?;
    Ok(StatusCode::OK)
}
