// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_users_and_branches;
mod m20250101_000002_create_leads;
mod m20250101_000003_create_tasks_and_activities;
mod m20250101_000004_create_lead_notes;
mod m20250102_000001_create_indexes;

/// 数据库迁移器
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// 获取所有迁移
    ///
    /// # 返回值
    ///
    /// 返回迁移列表
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_users_and_branches::Migration),
            Box::new(m20250101_000002_create_leads::Migration),
            Box::new(m20250101_000003_create_tasks_and_activities::Migration),
            Box::new(m20250101_000004_create_lead_notes::Migration),
            Box::new(m20250102_000001_create_indexes::Migration),
        ]
    }
}
