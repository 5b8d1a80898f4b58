// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::{create_test_app, TestApp, TestUser};
use axum::http::StatusCode;
use crmrs::domain::models::user::Role;
use serde_json::{json, Value};

async fn create_lead(app: &TestApp, user: &TestUser, body: Value) -> Value {
    let response = app
        .server
        .post("/leads")
        .add_header("Authorization", user.bearer())
        .json(&body)
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json()
}

async fn list(app: &TestApp, user: &TestUser, query: &str) -> Vec<Value> {
    let response = app
        .server
        .get(&format!("/leads{}", query))
        .add_header("Authorization", user.bearer())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    body.as_array().unwrap().clone()
}

fn names(leads: &[Value]) -> Vec<&str> {
    leads
        .iter()
        .map(|lead| lead["full_name"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn lead_crud_round_trip() {
    let app = create_test_app().await;
    let agent = app.seed_user("Agent", Role::Agent).await;

    let lead = create_lead(
        &app,
        &agent,
        json!({
            "inq_id": "INQ-001",
            "full_name": "Dilani Fernando",
            "destination_country": "Canada",
            "status": "New",
            "whatsapp_no": "0771234567"
        }),
    )
    .await;
    let id = lead["id"].as_str().unwrap();

    let response = app
        .server
        .put(&format!("/leads/{}", id))
        .add_header("Authorization", agent.bearer())
        .json(&json!({ "status": "Closed", "remarks": "Enrolled elsewhere" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: Value = response.json();
    assert_eq!(updated["status"], "Closed");
    assert_eq!(updated["remarks"], "Enrolled elsewhere");
    assert_eq!(updated["destination_country"], "Canada");

    let response = app
        .server
        .get(&format!("/leads/{}", id))
        .add_header("Authorization", agent.bearer())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = app
        .server
        .delete(&format!("/leads/{}", id))
        .add_header("Authorization", agent.bearer())
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let response = app
        .server
        .get(&format!("/leads/{}", id))
        .add_header("Authorization", agent.bearer())
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "lead not found");

    let response = app
        .server
        .put(&format!("/leads/{}", id))
        .add_header("Authorization", agent.bearer())
        .json(&json!({ "status": "New" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_lead_validates_name_and_unique_inquiry() {
    let app = create_test_app().await;
    let agent = app.seed_user("Agent", Role::Agent).await;

    let response = app
        .server
        .post("/leads")
        .add_header("Authorization", agent.bearer())
        .json(&json!({ "full_name": "A" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    create_lead(&app, &agent, json!({ "inq_id": "INQ-9", "full_name": "First" })).await;
    let response = app
        .server
        .post("/leads")
        .add_header("Authorization", agent.bearer())
        .json(&json!({ "inq_id": "INQ-9", "full_name": "Second" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn list_filters_and_orders_newest_first() {
    let app = create_test_app().await;
    let agent = app.seed_user("Agent", Role::Agent).await;

    create_lead(
        &app,
        &agent,
        json!({
            "full_name": "Amal Australia",
            "destination_country": "Australia",
            "status": "New",
            "inquiry_date": "2024-03-01T10:00:00Z",
            "allocated_user_id": agent.user.id
        }),
    )
    .await;
    create_lead(
        &app,
        &agent,
        json!({
            "full_name": "Bimal Canada",
            "destination_country": "Canada",
            "status": "In Progress",
            "whatsapp_no": "0719998888",
            "inquiry_date": "2024-03-31T23:30:00Z"
        }),
    )
    .await;
    create_lead(
        &app,
        &agent,
        json!({
            "full_name": "Chamari UK",
            "destination_country": "United Kingdom",
            "status": "New",
            "inquiry_date": "2024-04-01T00:00:00Z"
        }),
    )
    .await;

    let all = list(&app, &agent, "").await;
    assert_eq!(names(&all), vec!["Chamari UK", "Bimal Canada", "Amal Australia"]);

    let leads = list(&app, &agent, "?country=australia").await;
    assert_eq!(names(&leads), vec!["Amal Australia"]);

    let leads = list(&app, &agent, "?status=New").await;
    assert_eq!(names(&leads), vec!["Chamari UK", "Amal Australia"]);

    let leads = list(&app, &agent, &format!("?allocated_to={}", agent.user.id)).await;
    assert_eq!(names(&leads), vec!["Amal Australia"]);

    let leads = list(&app, &agent, "?q=99988").await;
    assert_eq!(names(&leads), vec!["Bimal Canada"]);

    let leads = list(&app, &agent, "?from=2024-03-01&to=2024-03-31").await;
    assert_eq!(names(&leads), vec!["Bimal Canada", "Amal Australia"]);

    let leads = list(&app, &agent, "?limit=1&offset=1").await;
    assert_eq!(names(&leads), vec!["Bimal Canada"]);

    let response = app
        .server
        .get("/leads?from=yesterday")
        .add_header("Authorization", agent.bearer())
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
