// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::activity::{Activity, ActivityKind};
use crate::domain::models::user::Actor;
use crate::domain::repositories::activity_repository::ActivityRepository;
use crate::utils::errors::ServiceError;
use std::sync::Arc;
use tracing::info;

/// 活动服务
///
/// 记录线索上的接触活动。修改和删除只允许原记录人操作，
/// 其他人访问时与记录不存在同样处理。
pub struct ActivityService {
    activity_repo: Arc<dyn ActivityRepository>,
}

impl ActivityService {
    pub fn new(activity_repo: Arc<dyn ActivityRepository>) -> Self {
        Self { activity_repo }
    }

    /// 以操作者身份记录一次活动
    ///
    /// 非备注类活动会把 "New" 状态的线索推进为 "In Progress"
    pub async fn record(
        &self,
        actor: &Actor,
        lead_id: &str,
        kind: ActivityKind,
        summary: Option<String>,
    ) -> Result<Activity, ServiceError> {
        let activity = Activity::new(lead_id.to_string(), Some(actor.id.clone()), kind, summary);
        let activity = self
            .activity_repo
            .record(&activity)
            .await
            .map_err(ServiceError::not_found_as("lead"))?;

        info!(activity_id = %activity.id, lead_id = %lead_id, kind = %kind, "Activity recorded");
        Ok(activity)
    }

    pub async fn list_for_lead(&self, lead_id: &str) -> Result<Vec<Activity>, ServiceError> {
        Ok(self.activity_repo.list_by_lead(lead_id).await?)
    }

    /// 更新操作者本人记录的活动摘要
    pub async fn update_summary(
        &self,
        actor: &Actor,
        activity_id: &str,
        summary: Option<String>,
    ) -> Result<Activity, ServiceError> {
        self.activity_repo
            .update_summary_owned(activity_id, &actor.id, summary)
            .await?
            .ok_or(ServiceError::NotFound("activity"))
    }

    /// 删除操作者本人记录的活动
    pub async fn delete(&self, actor: &Actor, activity_id: &str) -> Result<(), ServiceError> {
        self.activity_repo
            .delete_owned(activity_id, &actor.id)
            .await
            .map_err(ServiceError::not_found_as("activity"))?;
        info!(activity_id = %activity_id, actor = %actor.id, "Activity deleted");
        Ok(())
    }
}
