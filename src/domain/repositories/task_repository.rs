// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::activity::Activity;
use crate::domain::models::paging::Page;
use crate::domain::models::task::{Task, TaskView};
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 唯一约束冲突
    #[error("Conflict: {0}")]
    Conflict(String),
    /// 存储中的数据无法映射为领域对象
    #[error("Invalid stored data: {0}")]
    InvalidData(String),
}

/// 任务仓库特质
///
/// 定义任务数据访问接口
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// 创建新任务
    async fn create(&self, task: &Task) -> Result<Task, RepositoryError>;
    /// 根据ID查找任务
    async fn find_by_id(&self, id: &str) -> Result<Option<Task>, RepositoryError>;
    /// 列出线索下的全部任务，按创建时间倒序
    async fn list_by_lead(&self, lead_id: &str) -> Result<Vec<TaskView>, RepositoryError>;
    /// 保存任务，并在同一事务中写入可选的完成活动
    ///
    /// 任一写入失败时两者均回滚
    async fn save_with_completion(
        &self,
        task: &Task,
        completion: Option<&Activity>,
    ) -> Result<Task, RepositoryError>;
    /// 删除任务，不存在时返回 `NotFound`
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
    /// 查询分配给用户的未完成任务
    ///
    /// 按截止时间升序（空值在后）、创建时间倒序排列，返回当前页和总数
    async fn find_open_assigned(
        &self,
        user_id: &str,
        page: Page,
    ) -> Result<(Vec<TaskView>, u64), RepositoryError>;
}
