// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::User;
use crate::domain::repositories::task_repository::RepositoryError;
use crate::domain::repositories::user_repository::UserRepository;
use crate::infrastructure::database::entities::user as user_entity;
use crate::infrastructure::repositories::classify_write_error;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;

/// 用户仓库实现
///
/// 提供用户的创建、按邮箱查找和列表查询
#[derive(Clone)]
pub struct UserRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryImpl {
    /// 创建新的用户仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl TryFrom<user_entity::Model> for User {
    type Error = RepositoryError;

    fn try_from(model: user_entity::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            role: model
                .role
                .parse()
                .map_err(|e| RepositoryError::InvalidData(format!("user {}: {}", model.id, e)))?,
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            password_hash: model.password_hash,
            active: model.active,
            created_at: model.created_at,
        })
    }
}

impl From<User> for user_entity::ActiveModel {
    fn from(user: User) -> Self {
        Self {
            id: Set(user.id),
            name: Set(user.name),
            email: Set(user.email),
            phone: Set(user.phone),
            role: Set(user.role.to_string()),
            password_hash: Set(user.password_hash),
            active: Set(user.active),
            created_at: Set(user.created_at),
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, user: &User) -> Result<User, RepositoryError> {
        let model: user_entity::ActiveModel = user.clone().into();
        model
            .insert(self.db.as_ref())
            .await
            .map_err(classify_write_error)?
            .try_into()
    }

    async fn find_active_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let model = user_entity::Entity::find()
            .filter(user_entity::Column::Email.eq(email))
            .filter(user_entity::Column::Active.eq(true))
            .one(self.db.as_ref())
            .await?;
        model.map(User::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<User>, RepositoryError> {
        user_entity::Entity::find()
            .order_by_asc(user_entity::Column::Name)
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(User::try_from)
            .collect()
    }
}
