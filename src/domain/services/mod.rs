// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含系统的核心业务逻辑服务，这些服务封装了
/// 业务规则和领域逻辑，协调多个领域对象来完成业务操作。
///
/// 包含的服务：
/// - 任务生命周期服务（task_lifecycle_service）：任务更新与完成活动的原子写入
/// - 回访服务（follow_up_service）：计算到期的回访线索
/// - 今日工作服务（today_work_service）：合并未完成任务与到期回访
/// - 活动服务（activity_service）：活动记录与作者校验
/// - 线索服务（lead_service）、线索备注服务（lead_note_service）
/// - 认证服务（auth_service）：注册、登录与用户列表
/// - 分支服务（branch_service）
pub mod activity_service;
pub mod auth_service;
pub mod branch_service;
pub mod follow_up_service;
pub mod lead_note_service;
pub mod lead_service;
pub mod task_lifecycle_service;
pub mod today_work_service;
