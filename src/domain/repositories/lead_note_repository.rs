// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::lead_note::LeadNote;
use crate::domain::repositories::task_repository::RepositoryError;
use async_trait::async_trait;

/// 线索备注仓库特质
#[async_trait]
pub trait LeadNoteRepository: Send + Sync {
    /// 创建备注，线索不存在时返回 `NotFound`
    async fn create(&self, note: &LeadNote) -> Result<LeadNote, RepositoryError>;
    /// 列出线索的备注，按创建时间倒序
    async fn list_by_lead(&self, lead_id: &str) -> Result<Vec<LeadNote>, RepositoryError>;
    /// 更新作者本人的备注正文，未命中时返回 `None`
    async fn update_body_owned(
        &self,
        id: &str,
        author_id: &str,
        body: String,
    ) -> Result<Option<LeadNote>, RepositoryError>;
    /// 删除作者本人的备注，未命中时返回 `NotFound`
    async fn delete_owned(&self, id: &str, author_id: &str) -> Result<(), RepositoryError>;
}
