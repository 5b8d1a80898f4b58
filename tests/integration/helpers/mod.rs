// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use chrono::{DateTime, Duration, FixedOffset, Utc};
use crmrs::domain::models::lead::{Lead, NewLead};
use crmrs::domain::models::user::{Role, User};
use crmrs::domain::repositories::lead_repository::LeadRepository;
use crmrs::domain::repositories::user_repository::UserRepository;
use crmrs::infrastructure::auth::jwt::JwtManager;
use crmrs::infrastructure::auth::password::hash_password;
use crmrs::infrastructure::repositories::lead_repo_impl::LeadRepositoryImpl;
use crmrs::infrastructure::repositories::user_repo_impl::UserRepositoryImpl;
use crmrs::presentation::routes;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use uuid::Uuid;

pub const TEST_PASSWORD: &str = "password123";
const TEST_BCRYPT_COST: u32 = 4;

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub db: Arc<DatabaseConnection>,
    pub jwt: Arc<JwtManager>,
}

/// 测试用户及其访问令牌
pub struct TestUser {
    pub user: User,
    pub token: String,
}

impl TestUser {
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// 基于内存 SQLite 创建完整应用
///
/// 单连接池保证所有查询落在同一个内存库上
pub async fn create_test_app() -> TestApp {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    let db = Arc::new(db);

    let jwt = Arc::new(JwtManager::new("integration-test-secret", 15));
    let app = routes::create_router(db.clone(), jwt.clone(), TEST_BCRYPT_COST);
    let server = TestServer::new(app).unwrap();

    TestApp { server, db, jwt }
}

impl TestApp {
    /// 直接写入一个激活用户并签发令牌
    pub async fn seed_user(&self, name: &str, role: Role) -> TestUser {
        let repo = UserRepositoryImpl::new(self.db.clone());
        let hash = hash_password(TEST_PASSWORD, TEST_BCRYPT_COST).unwrap();
        let email = format!("{}-{}@example.com", name.to_lowercase(), Uuid::new_v4());
        let user = User::new(name.to_string(), email, None, role, hash);
        let user = repo.create(&user).await.unwrap();
        let token = self.jwt.issue(&user.id, user.role).unwrap();
        TestUser { user, token }
    }

    /// 直接写入一条线索，可指定创建时间
    pub async fn seed_lead(
        &self,
        full_name: &str,
        status: Option<&str>,
        allocated_to: Option<&str>,
        inquiry_date: Option<DateTime<FixedOffset>>,
        created_at: Option<DateTime<FixedOffset>>,
    ) -> Lead {
        let repo = LeadRepositoryImpl::new(self.db.clone());
        let mut lead = Lead::new(NewLead {
            full_name: full_name.to_string(),
            status: status.map(str::to_string),
            allocated_user_id: allocated_to.map(str::to_string),
            inquiry_date,
            ..Default::default()
        });
        if let Some(created_at) = created_at {
            lead.created_at = created_at;
            lead.updated_at = created_at;
        }
        repo.create(&lead).await.unwrap()
    }
}

/// 距今若干天的时间点（UTC）
pub fn days_ago(days: i64) -> DateTime<FixedOffset> {
    (Utc::now() - Duration::days(days)).fixed_offset()
}
