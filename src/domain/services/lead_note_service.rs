// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::lead_note::LeadNote;
use crate::domain::models::user::Actor;
use crate::domain::repositories::lead_note_repository::LeadNoteRepository;
use crate::utils::errors::ServiceError;
use std::sync::Arc;
use tracing::info;

/// 线索备注服务，备注只能由作者本人修改或删除
pub struct LeadNoteService {
    note_repo: Arc<dyn LeadNoteRepository>,
}

impl LeadNoteService {
    pub fn new(note_repo: Arc<dyn LeadNoteRepository>) -> Self {
        Self { note_repo }
    }

    pub async fn create(
        &self,
        actor: &Actor,
        lead_id: &str,
        body: String,
    ) -> Result<LeadNote, ServiceError> {
        let note = LeadNote::new(lead_id.to_string(), body, actor.id.clone());
        let note = self
            .note_repo
            .create(&note)
            .await
            .map_err(ServiceError::not_found_as("lead"))?;
        info!(note_id = %note.id, lead_id = %lead_id, "Lead note created");
        Ok(note)
    }

    pub async fn list_for_lead(&self, lead_id: &str) -> Result<Vec<LeadNote>, ServiceError> {
        Ok(self.note_repo.list_by_lead(lead_id).await?)
    }

    pub async fn update(
        &self,
        actor: &Actor,
        note_id: &str,
        body: String,
    ) -> Result<LeadNote, ServiceError> {
        self.note_repo
            .update_body_owned(note_id, &actor.id, body)
            .await?
            .ok_or(ServiceError::NotFound("note"))
    }

    pub async fn delete(&self, actor: &Actor, note_id: &str) -> Result<(), ServiceError> {
        self.note_repo
            .delete_owned(note_id, &actor.id)
            .await
            .map_err(ServiceError::not_found_as("note"))?;
        info!(note_id = %note_id, actor = %actor.id, "Lead note deleted");
        Ok(())
    }
}
