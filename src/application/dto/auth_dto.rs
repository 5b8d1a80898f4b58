// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::{Role, User};
use crate::domain::services::auth_service::Registration;
use crate::utils::errors::ServiceError;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 登录请求
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
}

/// 登录成功后返回的用户信息
#[derive(Debug, Serialize)]
pub struct LoginUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: LoginUser,
}

impl LoginResponse {
    pub fn new(access_token: String, user: User) -> Self {
        Self {
            access_token,
            user: LoginUser {
                id: user.id,
                name: user.name,
                email: user.email,
                role: user.role,
            },
        }
    }
}

/// 注册请求
///
/// 角色必须是 admin、coordinator、agent、viewer 之一
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, message = "name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
}

impl RegisterRequest {
    pub fn into_registration(self) -> Result<Registration, ServiceError> {
        self.validate()?;
        Ok(Registration {
            role: self.role.parse()?,
            name: self.name,
            email: self.email,
            phone: self.phone,
            password: self.password,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub id: String,
}
