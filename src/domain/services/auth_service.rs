// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::{Actor, Role, User};
use crate::domain::repositories::task_repository::RepositoryError;
use crate::domain::repositories::user_repository::UserRepository;
use crate::infrastructure::auth::jwt::JwtManager;
use crate::infrastructure::auth::password::{hash_password, verify_password};
use crate::utils::errors::ServiceError;
use std::sync::Arc;
use tracing::{info, warn};

/// 注册参数
#[derive(Debug, Clone)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Role,
    pub password: String,
}

/// 认证服务
///
/// 负责用户注册、登录与用户列表。密码哈希在阻塞线程池中执行。
pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
    jwt: Arc<JwtManager>,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(user_repo: Arc<dyn UserRepository>, jwt: Arc<JwtManager>, bcrypt_cost: u32) -> Self {
        Self {
            user_repo,
            jwt,
            bcrypt_cost,
        }
    }

    /// 使用邮箱和密码登录
    ///
    /// # 返回值
    ///
    /// * `Ok((String, User))` - 访问令牌及用户信息
    /// * `Err(ServiceError::Unauthorized)` - 用户不存在、未激活或密码错误
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, User), ServiceError> {
        let Some(user) = self.user_repo.find_active_by_email(email).await? else {
            warn!(email = %email, "Login rejected: unknown or inactive user");
            return Err(ServiceError::Unauthorized);
        };

        let password = password.to_string();
        let hash = user.password_hash.clone();
        let matches = tokio::task::spawn_blocking(move || verify_password(&password, &hash))
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        if !matches {
            warn!(user_id = %user.id, "Login rejected: wrong password");
            return Err(ServiceError::Unauthorized);
        }

        let token = self
            .jwt
            .issue(&user.id, user.role)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        info!(user_id = %user.id, "User logged in");
        Ok((token, user))
    }

    /// 校验访问令牌并还原操作者
    pub fn authenticate(&self, token: &str) -> Result<Actor, ServiceError> {
        self.jwt.verify(token).map_err(|e| {
            warn!("Rejected bearer token: {}", e);
            ServiceError::Unauthorized
        })
    }

    /// 注册新用户
    ///
    /// 匿名注册只能创建 agent，其他角色需要管理员令牌
    ///
    /// # 参数
    ///
    /// * `actor` - 携带令牌时解析出的操作者
    /// * `registration` - 注册参数
    ///
    /// # 返回值
    ///
    /// * `Ok(User)` - 新用户
    /// * `Err(ServiceError::Forbidden)` - 非管理员尝试创建特权角色
    /// * `Err(ServiceError::Conflict)` - 邮箱或手机号已被使用
    pub async fn register(
        &self,
        actor: Option<&Actor>,
        registration: Registration,
    ) -> Result<User, ServiceError> {
        let is_admin = actor.is_some_and(|a| a.has_any_role(&[Role::Admin]));
        if registration.role != Role::Agent && !is_admin {
            warn!(role = %registration.role, "Registration rejected: privileged role without admin token");
            return Err(ServiceError::Forbidden);
        }

        let password = registration.password;
        let cost = self.bcrypt_cost;
        let password_hash = tokio::task::spawn_blocking(move || hash_password(&password, cost))
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        let user = User::new(
            registration.name,
            registration.email,
            registration.phone.filter(|p| !p.is_empty()),
            registration.role,
            password_hash,
        );

        let user = self.user_repo.create(&user).await.map_err(|e| match e {
            RepositoryError::Conflict(_) => {
                ServiceError::Conflict("email already exists".to_string())
            }
            other => ServiceError::Repository(other),
        })?;

        info!(user_id = %user.id, role = %user.role, "User registered");
        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ServiceError> {
        Ok(self.user_repo.list().await?)
    }
}
