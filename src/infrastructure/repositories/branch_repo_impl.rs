// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::branch::Branch;
use crate::domain::repositories::branch_repository::BranchRepository;
use crate::domain::repositories::task_repository::RepositoryError;
use crate::infrastructure::database::entities::branch as branch_entity;
use crate::infrastructure::repositories::classify_write_error;
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::sync::Arc;

#[derive(Clone)]
pub struct BranchRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl BranchRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<branch_entity::Model> for Branch {
    fn from(model: branch_entity::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

#[async_trait]
impl BranchRepository for BranchRepositoryImpl {
    async fn create(&self, branch: &Branch) -> Result<Branch, RepositoryError> {
        let model = branch_entity::ActiveModel {
            id: Set(branch.id.clone()),
            name: Set(branch.name.clone()),
        };
        let inserted = model
            .insert(self.db.as_ref())
            .await
            .map_err(classify_write_error)?;
        Ok(inserted.into())
    }

    async fn list(&self) -> Result<Vec<Branch>, RepositoryError> {
        let models = branch_entity::Entity::find()
            .order_by_asc(branch_entity::Column::Name)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Branch::from).collect())
    }
}
