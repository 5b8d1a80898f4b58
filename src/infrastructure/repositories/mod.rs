// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::task_repository::RepositoryError;
use sea_orm::{DbErr, SqlErr};

/// 仓库实现模块
///
/// 提供领域仓库接口基于 SeaORM 的具体实现
pub mod activity_repo_impl;
pub mod branch_repo_impl;
pub mod lead_note_repo_impl;
pub mod lead_repo_impl;
pub mod task_repo_impl;
pub mod user_repo_impl;

/// 将写入时的数据库错误归类为仓库错误
///
/// 唯一约束冲突映射为 `Conflict`，外键约束失败（引用的线索不存在）
/// 和更新未命中映射为 `NotFound`
pub(crate) fn classify_write_error(err: DbErr) -> RepositoryError {
    if matches!(err, DbErr::RecordNotUpdated) {
        return RepositoryError::NotFound;
    }
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => RepositoryError::Conflict(detail),
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => RepositoryError::NotFound,
        _ => RepositoryError::Database(err),
    }
}
