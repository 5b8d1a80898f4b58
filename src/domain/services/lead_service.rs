// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::lead::{Lead, LeadFilter, LeadPatch, NewLead};
use crate::domain::repositories::lead_repository::LeadRepository;
use crate::domain::repositories::task_repository::RepositoryError;
use crate::utils::errors::ServiceError;
use std::sync::Arc;
use tracing::info;

/// 线索服务
pub struct LeadService {
    lead_repo: Arc<dyn LeadRepository>,
}

impl LeadService {
    pub fn new(lead_repo: Arc<dyn LeadRepository>) -> Self {
        Self { lead_repo }
    }

    /// 创建线索
    ///
    /// # 返回值
    ///
    /// * `Ok(Lead)` - 创建后的线索
    /// * `Err(ServiceError::Conflict)` - 询盘编号已存在
    pub async fn create(&self, new_lead: NewLead) -> Result<Lead, ServiceError> {
        let lead = self
            .lead_repo
            .create(&Lead::new(new_lead))
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => {
                    ServiceError::Conflict("inquiry id already exists".to_string())
                }
                other => ServiceError::Repository(other),
            })?;
        info!(lead_id = %lead.id, "Lead created");
        Ok(lead)
    }

    pub async fn get(&self, id: &str) -> Result<Lead, ServiceError> {
        self.lead_repo
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound("lead"))
    }

    /// 部分更新线索，未提供的字段保持原值
    pub async fn update(&self, id: &str, patch: LeadPatch) -> Result<Lead, ServiceError> {
        let mut lead = self.get(id).await?;
        lead.apply(patch);
        self.lead_repo
            .update(&lead)
            .await
            .map_err(ServiceError::not_found_as("lead"))
    }

    /// 删除线索
    ///
    /// 线索不存在时同样视为成功
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.lead_repo.delete(id).await?;
        info!(lead_id = %id, "Lead deleted");
        Ok(())
    }

    pub async fn list(&self, filter: &LeadFilter) -> Result<Vec<Lead>, ServiceError> {
        Ok(self.lead_repo.list(filter).await?)
    }
}
