// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::{create_test_app, TEST_PASSWORD};
use axum::http::StatusCode;
use crmrs::domain::models::user::Role;
use serde_json::json;

#[tokio::test]
async fn register_then_login_returns_token() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/auth/register")
        .json(&json!({
            "name": "Kamal Silva",
            "email": "kamal@example.com",
            "phone": "",
            "role": "agent",
            "password": "correct-horse"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    let user_id = body["id"].as_str().unwrap().to_string();

    let response = app
        .server
        .post("/auth/login")
        .json(&json!({ "email": "kamal@example.com", "password": "correct-horse" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    assert_eq!(body["user"]["id"], user_id.as_str());
    assert_eq!(body["user"]["role"], "agent");
    assert!(body["user"].get("password_hash").is_none());

    let token = body["access_token"].as_str().unwrap();
    let actor = app.jwt.verify(token).unwrap();
    assert_eq!(actor.id, user_id);
    assert_eq!(actor.role, Role::Agent);
}

#[tokio::test]
async fn register_duplicate_email_conflicts() {
    let app = create_test_app().await;
    let payload = json!({
        "name": "Dup User",
        "email": "dup@example.com",
        "role": "agent",
        "password": "long-password"
    });

    let first = app.server.post("/auth/register").json(&payload).await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    let second = app.server.post("/auth/register").json(&payload).await;
    assert_eq!(second.status_code(), StatusCode::CONFLICT);
    let body: serde_json::Value = second.json();
    assert_eq!(body["error"], "email already exists");
}

#[tokio::test]
async fn privileged_roles_require_admin_token() {
    let app = create_test_app().await;
    let admin = app.seed_user("Admin", Role::Admin).await;
    let coordinator = app.seed_user("Coordinator", Role::Coordinator).await;
    let payload = |email: &str, role: &str| {
        json!({
            "name": "New Staff",
            "email": email,
            "role": role,
            "password": "long-password"
        })
    };

    let response = app
        .server
        .post("/auth/register")
        .json(&payload("anon-admin@example.com", "admin"))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let response = app
        .server
        .post("/auth/register")
        .add_header("Authorization", coordinator.bearer())
        .json(&payload("coord-made@example.com", "coordinator"))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let response = app
        .server
        .post("/auth/register")
        .add_header("Authorization", "Bearer not-a-token")
        .json(&payload("bad-token@example.com", "agent"))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = app
        .server
        .post("/auth/register")
        .add_header("Authorization", admin.bearer())
        .json(&payload("second-admin@example.com", "admin"))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let response = app
        .server
        .post("/auth/login")
        .json(&json!({ "email": "second-admin@example.com", "password": "long-password" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["user"]["role"], "admin");
}

#[tokio::test]
async fn register_rejects_unknown_role_and_short_password() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/auth/register")
        .json(&json!({
            "name": "Bad Role",
            "email": "bad-role@example.com",
            "role": "superuser",
            "password": "long-password"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = app
        .server
        .post("/auth/register")
        .json(&json!({
            "name": "Short Pass",
            "email": "short@example.com",
            "role": "agent",
            "password": "abc"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_rejects_wrong_password_and_unknown_email() {
    let app = create_test_app().await;
    let agent = app.seed_user("Agent", Role::Agent).await;

    let response = app
        .server
        .post("/auth/login")
        .json(&json!({ "email": agent.user.email, "password": "wrong-password" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = app
        .server
        .post("/auth/login")
        .json(&json!({ "email": "nobody@example.com", "password": TEST_PASSWORD }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = app
        .server
        .post("/auth/login")
        .json(&json!({ "email": agent.user.email, "password": TEST_PASSWORD }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/auth/login")
        .text("{not json")
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn users_and_branches_listing() {
    let app = create_test_app().await;
    let admin = app.seed_user("Admin", Role::Admin).await;
    let agent = app.seed_user("Agent", Role::Agent).await;

    let response = app
        .server
        .get("/users")
        .add_header("Authorization", agent.bearer())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["total"], 2);
    assert_eq!(body["users"][0]["name"], "Admin");
    assert!(body["users"][0].get("email").is_none());

    let response = app
        .server
        .post("/branches")
        .add_header("Authorization", agent.bearer())
        .json(&json!({ "name": "Colombo" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

    let response = app
        .server
        .post("/branches")
        .add_header("Authorization", admin.bearer())
        .json(&json!({ "name": "Colombo" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let response = app
        .server
        .post("/branches")
        .add_header("Authorization", admin.bearer())
        .json(&json!({ "name": "Colombo" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);

    let response = app
        .server
        .get("/branches")
        .add_header("Authorization", agent.bearer())
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["total"], 1);
    assert_eq!(body["branches"][0]["name"], "Colombo");
}
