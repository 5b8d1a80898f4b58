// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::follow_up::FollowUpEntry;
use crate::domain::models::paging::Page;
use crate::domain::models::task::TaskView;
use crate::domain::models::user::Actor;
use crate::domain::repositories::task_repository::TaskRepository;
use crate::domain::services::follow_up_service::FollowUpService;
use crate::utils::errors::ServiceError;
use chrono::{DateTime, FixedOffset};
use std::sync::Arc;
use tracing::{info, warn};

/// 今日工作查询参数
#[derive(Debug, Clone, Default)]
pub struct TodayQuery {
    /// 查看指定用户的工作视图，为空时查看自己
    pub assigned_to: Option<String>,
    pub page: Page,
}

/// 今日工作视图
#[derive(Debug, Clone)]
pub struct TodayWork {
    pub tasks: Vec<TaskView>,
    pub follow_ups: Vec<FollowUpEntry>,
    /// 未分页的未完成任务总数
    pub total_tasks: u64,
    pub page: Page,
}

/// 今日工作聚合服务
///
/// 合并用户名下未完成的任务与已到期的回访线索
pub struct TodayWorkService {
    task_repo: Arc<dyn TaskRepository>,
    follow_ups: Arc<FollowUpService>,
}

impl TodayWorkService {
    pub fn new(task_repo: Arc<dyn TaskRepository>, follow_ups: Arc<FollowUpService>) -> Self {
        Self {
            task_repo,
            follow_ups,
        }
    }

    /// 解析查询的目标用户
    ///
    /// 查看他人视图需要 admin 或 coordinator 角色
    fn resolve_target(actor: &Actor, assigned_to: Option<&str>) -> Result<String, ServiceError> {
        match assigned_to.map(str::trim).filter(|s| !s.is_empty()) {
            Some(other) if other != actor.id => {
                if actor.role.can_view_others() {
                    Ok(other.to_string())
                } else {
                    warn!(actor = %actor.id, target = %other, "Rejected today view for another user");
                    Err(ServiceError::Forbidden)
                }
            }
            _ => Ok(actor.id.clone()),
        }
    }

    /// 获取今日工作视图
    ///
    /// # 参数
    ///
    /// * `actor` - 当前操作者
    /// * `query` - 目标用户与分页
    /// * `now` - 当前时间
    ///
    /// # 返回值
    ///
    /// * `Ok(TodayWork)` - 任务分页与全部到期回访
    /// * `Err(ServiceError::Forbidden)` - 无权查看他人视图
    pub async fn today(
        &self,
        actor: &Actor,
        query: TodayQuery,
        now: DateTime<FixedOffset>,
    ) -> Result<TodayWork, ServiceError> {
        let target = Self::resolve_target(actor, query.assigned_to.as_deref())?;

        let (tasks, total_tasks) = self
            .task_repo
            .find_open_assigned(&target, query.page)
            .await?;
        let follow_ups = self.follow_ups.due_follow_ups(&target, now).await?;

        info!(
            target = %target,
            tasks = total_tasks,
            follow_ups = follow_ups.len(),
            "Built today view"
        );

        Ok(TodayWork {
            tasks,
            follow_ups,
            total_tasks,
            page: query.page,
        })
    }
}
