// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::lead_note::LeadNote;
use crate::domain::repositories::lead_note_repository::LeadNoteRepository;
use crate::domain::repositories::task_repository::RepositoryError;
use crate::infrastructure::database::entities::lead_note as note_entity;
use crate::infrastructure::repositories::classify_write_error;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;

/// 线索备注仓库实现
#[derive(Clone)]
pub struct LeadNoteRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl LeadNoteRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<note_entity::Model> for LeadNote {
    fn from(model: note_entity::Model) -> Self {
        Self {
            id: model.id,
            lead_id: model.lead_id,
            body: model.body,
            created_by: model.created_by,
            created_at: model.created_at,
        }
    }
}

impl From<LeadNote> for note_entity::ActiveModel {
    fn from(note: LeadNote) -> Self {
        Self {
            id: Set(note.id),
            lead_id: Set(note.lead_id),
            body: Set(note.body),
            created_by: Set(note.created_by),
            created_at: Set(note.created_at),
        }
    }
}

#[async_trait]
impl LeadNoteRepository for LeadNoteRepositoryImpl {
    async fn create(&self, note: &LeadNote) -> Result<LeadNote, RepositoryError> {
        let model: note_entity::ActiveModel = note.clone().into();
        let inserted = model
            .insert(self.db.as_ref())
            .await
            .map_err(classify_write_error)?;
        Ok(inserted.into())
    }

    async fn list_by_lead(&self, lead_id: &str) -> Result<Vec<LeadNote>, RepositoryError> {
        let models = note_entity::Entity::find()
            .filter(note_entity::Column::LeadId.eq(lead_id))
            .order_by_desc(note_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(LeadNote::from).collect())
    }

    async fn update_body_owned(
        &self,
        id: &str,
        author_id: &str,
        body: String,
    ) -> Result<Option<LeadNote>, RepositoryError> {
        let Some(model) = note_entity::Entity::find_by_id(id.to_string())
            .filter(note_entity::Column::CreatedBy.eq(author_id))
            .one(self.db.as_ref())
            .await?
        else {
            return Ok(None);
        };

        let mut active: note_entity::ActiveModel = model.into();
        active.body = Set(body);
        let updated = active
            .update(self.db.as_ref())
            .await
            .map_err(classify_write_error)?;
        Ok(Some(updated.into()))
    }

    async fn delete_owned(&self, id: &str, author_id: &str) -> Result<(), RepositoryError> {
        let result = note_entity::Entity::delete_many()
            .filter(note_entity::Column::Id.eq(id))
            .filter(note_entity::Column::CreatedBy.eq(author_id))
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
