// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 请求与响应数据传输对象
///
/// 请求 DTO 通过 `validator` 校验后转换为领域层参数
pub mod activity_dto;
pub mod auth_dto;
pub mod branch_dto;
pub mod lead_dto;
pub mod lead_note_dto;
pub mod task_dto;
pub mod user_dto;
