// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::follow_up::FollowUpCandidate;
use crate::domain::models::lead::{Lead, LeadFilter};
use crate::domain::repositories::task_repository::RepositoryError;
use async_trait::async_trait;

/// 线索仓库特质
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// 创建线索，询盘编号重复时返回 `Conflict`
    async fn create(&self, lead: &Lead) -> Result<Lead, RepositoryError>;
    /// 根据ID查找线索
    async fn find_by_id(&self, id: &str) -> Result<Option<Lead>, RepositoryError>;
    /// 保存线索的全部字段
    async fn update(&self, lead: &Lead) -> Result<Lead, RepositoryError>;
    /// 删除线索，级联删除其任务、活动和备注
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
    /// 按过滤条件分页查询，按创建时间倒序
    async fn list(&self, filter: &LeadFilter) -> Result<Vec<Lead>, RepositoryError>;
    /// 查询分配给用户且状态未关闭的线索，附带各自最近一次回访电话时间
    async fn find_follow_up_candidates(
        &self,
        user_id: &str,
    ) -> Result<Vec<FollowUpCandidate>, RepositoryError>;
}
