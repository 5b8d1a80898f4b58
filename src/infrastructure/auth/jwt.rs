// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::models::user::{Actor, Role};

/// JWT 错误类型
#[derive(Error, Debug)]
pub enum JwtError {
    /// 令牌签发或校验失败
    #[error("JWT processing error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
    /// 令牌中的角色无法识别
    #[error("Invalid token: {0}")]
    InvalidClaims(String),
}

/// 访问令牌声明
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Claims {
    /// 用户ID
    pub uid: String,
    /// 用户角色
    pub role: String,
    /// 过期时间（Unix 时间戳）
    pub exp: i64,
    /// 签发时间（Unix 时间戳）
    pub iat: i64,
}

/// HS256 访问令牌管理器
///
/// 持有签名密钥，负责签发和校验访问令牌
#[derive(Clone)]
pub struct JwtManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtManager {
    /// 创建令牌管理器
    ///
    /// # 参数
    ///
    /// * `secret` - HS256 共享密钥
    /// * `ttl_minutes` - 令牌有效期（分钟）
    pub fn new(secret: &str, ttl_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    /// 为用户签发访问令牌
    pub fn issue(&self, user_id: &str, role: Role) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = Claims {
            uid: user_id.to_string(),
            role: role.to_string(),
            exp: (now + self.ttl).timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;
        debug!(user_id = %user_id, expires_at = claims.exp, "Issued access token");
        Ok(token)
    }

    /// 校验访问令牌并解析出操作者
    pub fn verify(&self, token: &str) -> Result<Actor, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            warn!(error = %e, "Access token validation failed");
            JwtError::Jwt(e)
        })?;

        let role = data
            .claims
            .role
            .parse::<Role>()
            .map_err(|e| JwtError::InvalidClaims(e.to_string()))?;

        Ok(Actor::new(data.claims.uid, role))
    }
}
