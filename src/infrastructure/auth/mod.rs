// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 认证基础设施
///
/// - jwt：HS256 访问令牌的签发与校验
/// - password：bcrypt 密码哈希
pub mod jwt;
pub mod password;
