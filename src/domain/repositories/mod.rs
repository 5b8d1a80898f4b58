// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 仓库接口定义了数据持久化的抽象契约，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 活动仓库（activity_repository）：线索活动记录及其对线索状态的推进
/// - 分支仓库（branch_repository）：分支机构
/// - 线索仓库（lead_repository）：线索增删改查与回访候选查询
/// - 线索备注仓库（lead_note_repository）：作者可编辑的备注
/// - 任务仓库（task_repository）：任务持久化及完成活动的原子写入
/// - 用户仓库（user_repository）：用户注册与登录查询
pub mod activity_repository;
pub mod branch_repository;
pub mod lead_note_repository;
pub mod lead_repository;
pub mod task_repository;
pub mod user_repository;
