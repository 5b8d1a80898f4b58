// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::User;
use crate::domain::repositories::task_repository::RepositoryError;
use async_trait::async_trait;

/// 用户仓库特质
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 创建用户，邮箱或手机号重复时返回 `Conflict`
    async fn create(&self, user: &User) -> Result<User, RepositoryError>;
    /// 根据邮箱查找处于激活状态的用户
    async fn find_active_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    /// 列出全部用户，按姓名排序
    async fn list(&self) -> Result<Vec<User>, RepositoryError>;
}
