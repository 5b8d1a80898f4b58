// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::create_test_app;
use axum::http::StatusCode;

/// 健康检查测试
///
/// 验证公开端点无需认证即可访问
#[tokio::test]
async fn health_check_works() {
    let app = create_test_app().await;

    let response = app.server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn version_reports_crate_version() {
    let app = create_test_app().await;

    let response = app.server.get("/version").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn protected_endpoint_returns_401_without_auth() {
    let app = create_test_app().await;

    let response = app.server.get("/leads").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "unauthorized");
}

#[tokio::test]
async fn protected_endpoint_rejects_garbage_token() {
    let app = create_test_app().await;

    let response = app
        .server
        .get("/tasks/today")
        .add_header("Authorization", "Bearer not-a-jwt")
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
