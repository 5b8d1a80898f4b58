// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::branch::Branch;
use crate::domain::models::user::{Actor, Role};
use crate::domain::repositories::branch_repository::BranchRepository;
use crate::domain::repositories::task_repository::RepositoryError;
use crate::utils::errors::ServiceError;
use std::sync::Arc;
use tracing::info;

/// 分支服务，只有管理员可以创建分支
pub struct BranchService {
    branch_repo: Arc<dyn BranchRepository>,
}

impl BranchService {
    pub fn new(branch_repo: Arc<dyn BranchRepository>) -> Self {
        Self { branch_repo }
    }

    pub async fn list(&self) -> Result<Vec<Branch>, ServiceError> {
        Ok(self.branch_repo.list().await?)
    }

    pub async fn create(&self, actor: &Actor, name: String) -> Result<Branch, ServiceError> {
        if !actor.has_any_role(&[Role::Admin]) {
            return Err(ServiceError::Forbidden);
        }

        let branch = self
            .branch_repo
            .create(&Branch::new(name))
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => {
                    ServiceError::Conflict("branch already exists".to_string())
                }
                other => ServiceError::Repository(other),
            })?;

        info!(branch_id = %branch.id, name = %branch.name, "Branch created");
        Ok(branch)
    }
}
