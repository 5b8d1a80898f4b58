// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::activity::Activity;
use crate::domain::repositories::task_repository::RepositoryError;
use async_trait::async_trait;

/// 活动仓库特质
#[async_trait]
pub trait ActivityRepository: Send + Sync {
    /// 写入活动记录
    ///
    /// 当活动属于实际接触时，在同一事务中把状态为 "New" 的线索推进为 "In Progress"。
    /// 线索不存在时返回 `NotFound`。
    async fn record(&self, activity: &Activity) -> Result<Activity, RepositoryError>;
    /// 列出线索的活动，按发生时间倒序
    async fn list_by_lead(&self, lead_id: &str) -> Result<Vec<Activity>, RepositoryError>;
    /// 更新由 `staff_id` 记录的活动摘要
    ///
    /// 活动不存在或不属于该员工时返回 `None`
    async fn update_summary_owned(
        &self,
        id: &str,
        staff_id: &str,
        summary: Option<String>,
    ) -> Result<Option<Activity>, RepositoryError>;
    /// 删除由 `staff_id` 记录的活动，未命中时返回 `NotFound`
    async fn delete_owned(&self, id: &str, staff_id: &str) -> Result<(), RepositoryError>;
}
