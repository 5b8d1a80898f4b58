// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::follow_up::FollowUpEntry;
use crate::domain::models::paging::Page;
use crate::domain::models::task::{Task, TaskPatch, TaskView};
use crate::domain::services::task_lifecycle_service::NewTask;
use crate::domain::services::today_work_service::{TodayQuery, TodayWork};
use crate::utils::errors::ServiceError;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 创建任务请求
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// 任务标题（至少 2 个字符）
    #[validate(length(min = 2, message = "title must be at least 2 characters"))]
    pub title: String,

    pub due_date: Option<DateTime<FixedOffset>>,

    /// 任务类型，取值同活动类型
    pub kind: String,

    /// 初始状态
    pub status: String,

    pub assigned_to: Option<String>,
}

impl CreateTaskRequest {
    /// 校验并转换为领域层的新任务
    pub fn into_new_task(self) -> Result<NewTask, ServiceError> {
        self.validate()?;
        Ok(NewTask {
            kind: self.kind.parse()?,
            status: self.status.parse()?,
            title: self.title,
            due_date: self.due_date,
            assigned_to: self.assigned_to,
        })
    }
}

/// 任务部分更新请求
///
/// 缺省字段与显式 `null` 都表示保持原值。
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[validate(length(min = 2, message = "title must be at least 2 characters"))]
    pub title: Option<String>,
    pub due_date: Option<DateTime<FixedOffset>>,
    pub kind: Option<String>,
    pub status: Option<String>,
    pub assigned_to: Option<String>,
}

impl UpdateTaskRequest {
    /// 校验并转换为任务补丁
    ///
    /// 状态或类型取值非法时返回 `ServiceError::Validation`，此时不会发生任何写入
    pub fn into_patch(self) -> Result<TaskPatch, ServiceError> {
        self.validate()?;
        Ok(TaskPatch {
            kind: self.kind.as_deref().map(str::parse).transpose()?,
            status: self.status.as_deref().map(str::parse).transpose()?,
            title: self.title,
            due_date: self.due_date,
            assigned_to: self.assigned_to,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: String,
    pub lead_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<FixedOffset>>,
    pub kind: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_name: Option<String>,
    pub created_at: DateTime<FixedOffset>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            lead_id: task.lead_id,
            title: task.title,
            due_date: task.due_date,
            kind: task.kind.to_string(),
            status: task.status.to_string(),
            assigned_to: task.assigned_to,
            assigned_to_name: None,
            created_at: task.created_at,
        }
    }
}

impl From<TaskView> for TaskResponse {
    fn from(view: TaskView) -> Self {
        let mut response = TaskResponse::from(view.task);
        response.assigned_to_name = view.assigned_to_name;
        response
    }
}

#[derive(Debug, Serialize)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskResponse>,
    pub total_count: usize,
}

impl From<Vec<TaskView>> for TaskListResponse {
    fn from(views: Vec<TaskView>) -> Self {
        let tasks: Vec<TaskResponse> = views.into_iter().map(TaskResponse::from).collect();
        Self {
            total_count: tasks.len(),
            tasks,
        }
    }
}

/// 今日工作查询参数
///
/// `limit` 与 `offset` 以原始字符串接收，非数字时回落为默认值而不是拒绝请求
#[derive(Debug, Default, Deserialize)]
pub struct TodayQueryParams {
    pub assigned_to: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl From<TodayQueryParams> for TodayQuery {
    fn from(params: TodayQueryParams) -> Self {
        Self {
            page: Page::from_raw(params.limit.as_deref(), params.offset.as_deref()),
            assigned_to: params.assigned_to,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TodayTasksResponse {
    pub tasks: Vec<TaskResponse>,
    pub follow_up_call_tasks: Vec<FollowUpEntry>,
    pub total_tasks: u64,
    pub total_follow_up_calls: usize,
    pub limit: u64,
    pub offset: u64,
}

impl From<TodayWork> for TodayTasksResponse {
    fn from(work: TodayWork) -> Self {
        Self {
            tasks: work.tasks.into_iter().map(TaskResponse::from).collect(),
            total_follow_up_calls: work.follow_ups.len(),
            follow_up_call_tasks: work.follow_ups,
            total_tasks: work.total_tasks,
            limit: work.page.limit,
            offset: work.page.offset,
        }
    }
}
