// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 包含系统的技术实现细节：令牌签发与密码哈希、数据库连接和实体映射、
/// 以及领域仓库接口的具体实现。
///
/// 基础设施层依赖于领域层的抽象接口，领域层不感知具体技术实现。
pub mod auth;
pub mod database;
pub mod repositories;
