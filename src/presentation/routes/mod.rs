// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::services::activity_service::ActivityService;
use crate::domain::services::auth_service::AuthService;
use crate::domain::services::branch_service::BranchService;
use crate::domain::services::follow_up_service::FollowUpService;
use crate::domain::services::lead_note_service::LeadNoteService;
use crate::domain::services::lead_service::LeadService;
use crate::domain::services::task_lifecycle_service::TaskLifecycleService;
use crate::domain::services::today_work_service::TodayWorkService;
use crate::infrastructure::auth::jwt::JwtManager;
use crate::infrastructure::repositories::activity_repo_impl::ActivityRepositoryImpl;
use crate::infrastructure::repositories::branch_repo_impl::BranchRepositoryImpl;
use crate::infrastructure::repositories::lead_note_repo_impl::LeadNoteRepositoryImpl;
use crate::infrastructure::repositories::lead_repo_impl::LeadRepositoryImpl;
use crate::infrastructure::repositories::task_repo_impl::TaskRepositoryImpl;
use crate::infrastructure::repositories::user_repo_impl::UserRepositoryImpl;
use crate::presentation::handlers::{
    activity_handler, auth_handler, branch_handler, lead_handler, lead_note_handler,
    task_handler, user_handler,
};
use crate::presentation::middleware::auth_middleware::auth_middleware;
use axum::{
    middleware,
    routing::{get, post, put},
    Extension, Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// 构建应用路由
///
/// 组装仓库与服务，并注册公开路由和需要认证的路由
///
/// # 参数
///
/// * `db` - 数据库连接
/// * `jwt` - 令牌管理器
/// * `bcrypt_cost` - 注册时的密码哈希成本
pub fn create_router(
    db: Arc<DatabaseConnection>,
    jwt: Arc<JwtManager>,
    bcrypt_cost: u32,
) -> Router {
    let task_repo = Arc::new(TaskRepositoryImpl::new(db.clone()));
    let lead_repo = Arc::new(LeadRepositoryImpl::new(db.clone()));
    let activity_repo = Arc::new(ActivityRepositoryImpl::new(db.clone()));
    let note_repo = Arc::new(LeadNoteRepositoryImpl::new(db.clone()));
    let user_repo = Arc::new(UserRepositoryImpl::new(db.clone()));
    let branch_repo = Arc::new(BranchRepositoryImpl::new(db));

    let follow_up_service = Arc::new(FollowUpService::new(lead_repo.clone()));
    let task_service = Arc::new(TaskLifecycleService::new(task_repo.clone()));
    let today_service = Arc::new(TodayWorkService::new(task_repo, follow_up_service));
    let lead_service = Arc::new(LeadService::new(lead_repo));
    let activity_service = Arc::new(ActivityService::new(activity_repo));
    let note_service = Arc::new(LeadNoteService::new(note_repo));
    let auth_service = Arc::new(AuthService::new(user_repo, jwt.clone(), bcrypt_cost));
    let branch_service = Arc::new(BranchService::new(branch_repo));

    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route("/auth/login", post(auth_handler::login))
        .route("/auth/register", post(auth_handler::register));

    let protected_routes = Router::new()
        .route("/users", get(user_handler::list_users))
        .route(
            "/branches",
            get(branch_handler::list_branches).post(branch_handler::create_branch),
        )
        .route(
            "/leads",
            get(lead_handler::list_leads).post(lead_handler::create_lead),
        )
        .route(
            "/leads/{id}",
            get(lead_handler::get_lead)
                .put(lead_handler::update_lead)
                .delete(lead_handler::delete_lead),
        )
        .route(
            "/leads/{id}/tasks",
            get(task_handler::list_tasks).post(task_handler::create_task),
        )
        .route(
            "/leads/{id}/tasks/{task_id}",
            put(task_handler::update_lead_task).delete(task_handler::delete_lead_task),
        )
        .route(
            "/leads/{id}/activities",
            get(activity_handler::list_activities).post(activity_handler::create_activity),
        )
        .route(
            "/leads/{id}/activities/{activity_id}",
            put(activity_handler::update_activity).delete(activity_handler::delete_activity),
        )
        .route(
            "/leads/{id}/notes",
            get(lead_note_handler::list_notes).post(lead_note_handler::create_note),
        )
        .route(
            "/leads/{id}/notes/{note_id}",
            put(lead_note_handler::update_note).delete(lead_note_handler::delete_note),
        )
        .route("/tasks/today", get(task_handler::today))
        .route(
            "/tasks/{task_id}",
            put(task_handler::update_task).delete(task_handler::delete_task),
        )
        .route_layer(middleware::from_fn_with_state(jwt, auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(Extension(task_service))
        .layer(Extension(today_service))
        .layer(Extension(lead_service))
        .layer(Extension(activity_service))
        .layer(Extension(note_service))
        .layer(Extension(auth_service))
        .layer(Extension(branch_service))
}

pub async fn health_check() -> &'static str {
    "OK"
}

pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
