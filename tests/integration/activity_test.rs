// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::{create_test_app, TestApp, TestUser};
use axum::http::StatusCode;
use crmrs::domain::models::user::Role;
use serde_json::{json, Value};

async fn record(app: &TestApp, user: &TestUser, lead_id: &str, body: Value) -> Value {
    let response = app
        .server
        .post(&format!("/leads/{}/activities", lead_id))
        .add_header("Authorization", user.bearer())
        .json(&body)
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json()
}

async fn lead_status(app: &TestApp, user: &TestUser, lead_id: &str) -> Value {
    let response = app
        .server
        .get(&format!("/leads/{}", lead_id))
        .add_header("Authorization", user.bearer())
        .await;
    let body: Value = response.json();
    body["status"].clone()
}

#[tokio::test]
async fn contact_activity_promotes_new_lead() {
    let app = create_test_app().await;
    let agent = app.seed_user("Agent", Role::Agent).await;
    let lead = app.seed_lead("Promoted", Some("New"), None, None, None).await;

    let activity = record(&app, &agent, &lead.id, json!({ "kind": "call" })).await;
    assert_eq!(activity["staff_id"], agent.user.id.as_str());
    assert_eq!(activity["lead_id"], lead.id.as_str());

    assert_eq!(lead_status(&app, &agent, &lead.id).await, "In Progress");
}

#[tokio::test]
async fn note_activity_does_not_promote_and_other_statuses_stay() {
    let app = create_test_app().await;
    let agent = app.seed_user("Agent", Role::Agent).await;
    let fresh = app.seed_lead("Fresh", Some("New"), None, None, None).await;
    let closed = app.seed_lead("Closed", Some("Closed"), None, None, None).await;

    record(&app, &agent, &fresh.id, json!({ "kind": "note", "summary": "internal" })).await;
    record(&app, &agent, &closed.id, json!({ "kind": "meeting" })).await;

    assert_eq!(lead_status(&app, &agent, &fresh.id).await, "New");
    assert_eq!(lead_status(&app, &agent, &closed.id).await, "Closed");
}

#[tokio::test]
async fn activity_on_missing_lead_is_not_found() {
    let app = create_test_app().await;
    let agent = app.seed_user("Agent", Role::Agent).await;

    let response = app
        .server
        .post("/leads/missing/activities")
        .add_header("Authorization", agent.bearer())
        .json(&json!({ "kind": "call" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = app
        .server
        .post("/leads/missing/activities")
        .add_header("Authorization", agent.bearer())
        .json(&json!({ "kind": "pigeon" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn only_author_can_edit_or_delete_activity() {
    let app = create_test_app().await;
    let author = app.seed_user("Author", Role::Agent).await;
    let admin = app.seed_user("Admin", Role::Admin).await;
    let lead = app.seed_lead("Owned", None, None, None, None).await;

    let activity = record(&app, &author, &lead.id, json!({ "kind": "email" })).await;
    let path = format!("/leads/{}/activities/{}", lead.id, activity["id"].as_str().unwrap());

    let response = app
        .server
        .put(&path)
        .add_header("Authorization", admin.bearer())
        .json(&json!({ "summary": "hijacked" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = app
        .server
        .delete(&path)
        .add_header("Authorization", admin.bearer())
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = app
        .server
        .put(&path)
        .add_header("Authorization", author.bearer())
        .json(&json!({ "summary": "Sent fee structure" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: Value = response.json();
    assert_eq!(updated["summary"], "Sent fee structure");
    assert_eq!(updated["kind"], "email");

    let response = app
        .server
        .delete(&path)
        .add_header("Authorization", author.bearer())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = app
        .server
        .get(&format!("/leads/{}/activities", lead.id))
        .add_header("Authorization", author.bearer())
        .await;
    let body: Value = response.json();
    assert_eq!(body["total_count"], 0);
}
