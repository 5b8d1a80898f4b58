// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::activity::ActivityKind;
use crate::domain::models::task::{Task, TaskPatch, TaskStatus, TaskView};
use crate::domain::models::user::Actor;
use crate::domain::repositories::task_repository::TaskRepository;
use crate::utils::errors::ServiceError;
use chrono::{DateTime, FixedOffset};
use std::sync::Arc;
use tracing::{debug, info};

/// 新建任务参数
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub due_date: Option<DateTime<FixedOffset>>,
    pub kind: ActivityKind,
    pub status: TaskStatus,
    pub assigned_to: Option<String>,
}

/// 任务生命周期服务
///
/// 负责任务的创建、部分更新与删除。更新时根据状态流转决定是否
/// 写入完成活动，任务保存和活动写入在同一事务中完成。
pub struct TaskLifecycleService {
    task_repo: Arc<dyn TaskRepository>,
}

impl TaskLifecycleService {
    pub fn new(task_repo: Arc<dyn TaskRepository>) -> Self {
        Self { task_repo }
    }

    /// 在线索下创建任务
    ///
    /// # 参数
    ///
    /// * `lead_id` - 所属线索ID
    /// * `new_task` - 任务内容
    ///
    /// # 返回值
    ///
    /// * `Ok(Task)` - 创建后的任务
    /// * `Err(ServiceError::NotFound)` - 线索不存在
    pub async fn create_task(&self, lead_id: &str, new_task: NewTask) -> Result<Task, ServiceError> {
        let mut task = Task::new(
            lead_id.to_string(),
            new_task.title,
            new_task.kind,
            new_task.status,
        );
        task.due_date = new_task.due_date;
        task.assigned_to = new_task.assigned_to;

        let task = self
            .task_repo
            .create(&task)
            .await
            .map_err(ServiceError::not_found_as("lead"))?;

        info!(task_id = %task.id, lead_id = %task.lead_id, "Task created");
        Ok(task)
    }

    /// 列出线索下的任务
    pub async fn list_for_lead(&self, lead_id: &str) -> Result<Vec<TaskView>, ServiceError> {
        Ok(self.task_repo.list_by_lead(lead_id).await?)
    }

    /// 部分更新任务
    ///
    /// 状态从非 done 进入 done 时，以操作者身份写入一条完成活动；
    /// 其他任何流转都不会产生活动。
    ///
    /// # 参数
    ///
    /// * `actor` - 当前操作者
    /// * `task_id` - 任务ID
    /// * `patch` - 已校验的部分更新
    ///
    /// # 返回值
    ///
    /// * `Ok(Task)` - 更新后的任务
    /// * `Err(ServiceError::NotFound)` - 任务不存在
    pub async fn update_task(
        &self,
        actor: &Actor,
        task_id: &str,
        patch: TaskPatch,
    ) -> Result<Task, ServiceError> {
        let mut task = self
            .task_repo
            .find_by_id(task_id)
            .await?
            .ok_or(ServiceError::NotFound("task"))?;

        let prev = task.status;
        let transition = task.apply(patch);
        let completion = transition
            .emits_completion_activity()
            .then(|| task.completion_activity(&actor.id));

        debug!(
            task_id = %task.id,
            prev = %prev,
            next = %task.status,
            ?transition,
            "Saving task"
        );

        let saved = self
            .task_repo
            .save_with_completion(&task, completion.as_ref())
            .await
            .map_err(ServiceError::not_found_as("task"))?;

        if completion.is_some() {
            info!(task_id = %saved.id, actor = %actor.id, "Task completed, activity recorded");
        }

        Ok(saved)
    }

    /// 删除任务
    pub async fn delete_task(&self, task_id: &str) -> Result<(), ServiceError> {
        self.task_repo
            .delete(task_id)
            .await
            .map_err(ServiceError::not_found_as("task"))?;
        info!(task_id = %task_id, "Task deleted");
        Ok(())
    }
}
