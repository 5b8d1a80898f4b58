// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use bcrypt::{hash, verify, BcryptError};

/// 使用 bcrypt 哈希密码
///
/// 计算量较大，在异步上下文中应放入 `spawn_blocking` 执行
///
/// # 参数
///
/// * `password` - 明文密码
/// * `cost` - bcrypt 计算成本，取值 4 到 31
pub fn hash_password(password: &str, cost: u32) -> Result<String, BcryptError> {
    hash(password, cost)
}

/// 校验密码与哈希是否匹配
///
/// 哈希格式不合法时视为不匹配
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    verify(password, password_hash).unwrap_or(false)
}
