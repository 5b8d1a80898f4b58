// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::models::activity::{Activity, ActivityKind};

/// 任务实体
///
/// 表示针对某个线索（Lead）的一项待办工作，例如回访电话、
/// 发送邮件或安排会面。任务具有类型、状态和可选的负责人。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// 任务唯一标识符
    pub id: String,
    /// 所属线索ID
    pub lead_id: String,
    /// 任务标题
    pub title: String,
    /// 截止时间
    pub due_date: Option<DateTime<FixedOffset>>,
    /// 任务类型，与活动类型共用同一枚举
    pub kind: ActivityKind,
    /// 任务状态
    pub status: TaskStatus,
    /// 负责人用户ID
    pub assigned_to: Option<String>,
    /// 创建时间
    pub created_at: DateTime<FixedOffset>,
}

/// 任务状态枚举
///
/// 状态流转：
/// Open → InProgress → Done / Cancelled
///
/// 只有进入 Done 的流转会产生完成活动记录，见 [`StatusTransition`]。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// 待处理
    #[default]
    Open,
    /// 进行中
    InProgress,
    /// 已完成
    Done,
    /// 已取消
    Cancelled,
}

impl TaskStatus {
    /// 今日工作视图中视为"未完成"的状态
    pub const OPEN_STATES: [TaskStatus; 2] = [TaskStatus::Open, TaskStatus::InProgress];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Open => "open",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
            TaskStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(TaskStatus::Open),
            "in_progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            "cancelled" => Ok(TaskStatus::Cancelled),
            other => Err(DomainError::ValidationError(format!(
                "invalid status '{}': expected one of open, in_progress, done, cancelled",
                other
            ))),
        }
    }
}

/// 状态流转结果
///
/// 由 [`StatusTransition::between`] 根据更新前后的状态计算得出，
/// 是判断是否需要写入完成活动的唯一入口。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTransition {
    /// 状态未变化（包括 done → done）
    Unchanged,
    /// 从非 done 状态进入 done
    Completed,
    /// 从 done 回退到其他状态
    Reopened,
    /// 其他非 done 状态之间的流转
    Moved,
}

impl StatusTransition {
    pub fn between(prev: TaskStatus, next: TaskStatus) -> Self {
        match (prev, next) {
            (p, n) if p == n => StatusTransition::Unchanged,
            (_, TaskStatus::Done) => StatusTransition::Completed,
            (TaskStatus::Done, _) => StatusTransition::Reopened,
            _ => StatusTransition::Moved,
        }
    }

    /// 是否需要写入一条完成活动
    pub fn emits_completion_activity(self) -> bool {
        matches!(self, StatusTransition::Completed)
    }
}

/// 附带负责人姓名的任务视图
#[derive(Debug, Clone, PartialEq)]
pub struct TaskView {
    pub task: Task,
    pub assigned_to_name: Option<String>,
}

/// 任务部分更新
///
/// 字段为 `None` 表示保持原值。JSON 中缺省字段与显式 `null`
/// 均映射为 `None`，因此无法通过补丁清空可空字段。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub due_date: Option<DateTime<FixedOffset>>,
    pub kind: Option<ActivityKind>,
    pub status: Option<TaskStatus>,
    pub assigned_to: Option<String>,
}

/// 领域错误类型
///
/// 表示在领域层可能发生的错误，主要是输入值不符合领域规则。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// 验证错误，当输入数据不符合领域规则时发生
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl Task {
    /// 创建一个新的任务
    ///
    /// # 参数
    ///
    /// * `lead_id` - 所属线索ID
    /// * `title` - 任务标题
    /// * `kind` - 任务类型
    /// * `status` - 初始状态
    ///
    /// # 返回值
    ///
    /// 返回新创建的任务实例，截止时间和负责人为空
    pub fn new(lead_id: String, title: String, kind: ActivityKind, status: TaskStatus) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            lead_id,
            title,
            due_date: None,
            kind,
            status,
            assigned_to: None,
            created_at: Utc::now().into(),
        }
    }

    /// 应用部分更新
    ///
    /// # 返回值
    ///
    /// 返回更新前后状态之间的流转结果
    pub fn apply(&mut self, patch: TaskPatch) -> StatusTransition {
        let prev = self.status;

        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = Some(due_date);
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(assigned_to) = patch.assigned_to {
            self.assigned_to = Some(assigned_to);
        }

        StatusTransition::between(prev, self.status)
    }

    /// 构造记录任务完成的活动
    ///
    /// 活动类型取任务类型，摘要为 `Task completed: <标题>`
    pub fn completion_activity(&self, actor_id: &str) -> Activity {
        Activity::new(
            self.lead_id.clone(),
            Some(actor_id.to_string()),
            self.kind,
            Some(format!("Task completed: {}", self.title)),
        )
    }
}
