// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 负责 HTTP 边界上的数据传输对象：请求校验以及领域结果到响应结构的映射
pub mod dto;
