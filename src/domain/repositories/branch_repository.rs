// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::branch::Branch;
use crate::domain::repositories::task_repository::RepositoryError;
use async_trait::async_trait;

/// 分支仓库特质
#[async_trait]
pub trait BranchRepository: Send + Sync {
    /// 创建分支，名称重复时返回 `Conflict`
    async fn create(&self, branch: &Branch) -> Result<Branch, RepositoryError>;
    /// 列出全部分支，按名称排序
    async fn list(&self) -> Result<Vec<Branch>, RepositoryError>;
}
