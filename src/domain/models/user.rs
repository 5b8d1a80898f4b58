// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::models::task::DomainError;

/// 用户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Coordinator,
    Agent,
    Viewer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Coordinator => "coordinator",
            Role::Agent => "agent",
            Role::Viewer => "viewer",
        }
    }

    /// 可以查看他人工作视图的角色
    pub fn can_view_others(&self) -> bool {
        matches!(self, Role::Admin | Role::Coordinator)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "coordinator" => Ok(Role::Coordinator),
            "agent" => Ok(Role::Agent),
            "viewer" => Ok(Role::Viewer),
            other => Err(DomainError::ValidationError(format!(
                "invalid role '{}': expected one of admin, coordinator, agent, viewer",
                other
            ))),
        }
    }
}

/// 系统用户
///
/// 密码哈希不参与序列化
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Role,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub active: bool,
    pub created_at: DateTime<FixedOffset>,
}

impl User {
    /// 创建一个处于激活状态的新用户
    ///
    /// # 参数
    ///
    /// * `name` - 用户名
    /// * `email` - 邮箱，全局唯一
    /// * `phone` - 手机号，可选
    /// * `role` - 角色
    /// * `password_hash` - 已哈希的密码
    pub fn new(
        name: String,
        email: String,
        phone: Option<String>,
        role: Role,
        password_hash: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            phone,
            role,
            password_hash,
            active: true,
            created_at: Utc::now().into(),
        }
    }
}

/// 当前请求的操作者
///
/// 由认证中间件从访问令牌中解析，并显式传入各服务方法。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: String,
    pub role: Role,
}

impl Actor {
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }

    /// 操作者是否具有给定角色之一
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role)
    }
}
