// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::{create_test_app, TestApp, TestUser};
use axum::http::StatusCode;
use crmrs::domain::models::activity::{Activity, ActivityKind};
use crmrs::domain::models::task::{Task, TaskStatus};
use crmrs::domain::models::user::Role;
use crmrs::domain::repositories::task_repository::TaskRepository;
use crmrs::infrastructure::repositories::task_repo_impl::TaskRepositoryImpl;
use serde_json::{json, Value};

async fn create_task(app: &TestApp, user: &TestUser, lead_id: &str, body: Value) -> Value {
    let response = app
        .server
        .post(&format!("/leads/{}/tasks", lead_id))
        .add_header("Authorization", user.bearer())
        .json(&body)
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json()
}

async fn list_activities(app: &TestApp, user: &TestUser, lead_id: &str) -> Value {
    let response = app
        .server
        .get(&format!("/leads/{}/activities", lead_id))
        .add_header("Authorization", user.bearer())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json()
}

#[tokio::test]
async fn completing_task_records_exactly_one_activity() {
    let app = create_test_app().await;
    let agent = app.seed_user("Agent", Role::Agent).await;
    let lead = app
        .seed_lead("Sahan Perera", Some("In Progress"), Some(&agent.user.id), None, None)
        .await;

    let task = create_task(
        &app,
        &agent,
        &lead.id,
        json!({ "title": "Call about visa", "kind": "call", "status": "open" }),
    )
    .await;
    let task_id = task["id"].as_str().unwrap();

    let response = app
        .server
        .put(&format!("/tasks/{}", task_id))
        .add_header("Authorization", agent.bearer())
        .json(&json!({ "status": "done" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: Value = response.json();
    assert_eq!(updated["status"], "done");
    assert_eq!(updated["title"], "Call about visa");

    let activities = list_activities(&app, &agent, &lead.id).await;
    assert_eq!(activities["total_count"], 1);
    let activity = &activities["activities"][0];
    assert_eq!(activity["kind"], "call");
    assert_eq!(activity["staff_id"], agent.user.id.as_str());
    assert_eq!(activity["summary"], "Task completed: Call about visa");

    // done -> done does not record again
    let response = app
        .server
        .put(&format!("/leads/{}/tasks/{}", lead.id, task_id))
        .add_header("Authorization", agent.bearer())
        .json(&json!({ "status": "done", "title": "Call about visa (again)" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let activities = list_activities(&app, &agent, &lead.id).await;
    assert_eq!(activities["total_count"], 1);
}

#[tokio::test]
async fn reopening_and_moving_do_not_record_activities() {
    let app = create_test_app().await;
    let agent = app.seed_user("Agent", Role::Agent).await;
    let lead = app.seed_lead("Nadeesha", None, None, None, None).await;

    let task = create_task(
        &app,
        &agent,
        &lead.id,
        json!({ "title": "Send offer", "kind": "email", "status": "done" }),
    )
    .await;
    let task_id = task["id"].as_str().unwrap();

    for status in ["open", "in_progress", "cancelled"] {
        let response = app
            .server
            .put(&format!("/tasks/{}", task_id))
            .add_header("Authorization", agent.bearer())
            .json(&json!({ "status": status }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    let activities = list_activities(&app, &agent, &lead.id).await;
    assert_eq!(activities["total_count"], 0);
}

#[tokio::test]
async fn update_validates_before_writing() {
    let app = create_test_app().await;
    let agent = app.seed_user("Agent", Role::Agent).await;
    let lead = app.seed_lead("Ruwan", None, None, None, None).await;

    let task = create_task(
        &app,
        &agent,
        &lead.id,
        json!({ "title": "Meet parents", "kind": "meeting", "status": "open" }),
    )
    .await;
    let task_id = task["id"].as_str().unwrap();

    let response = app
        .server
        .put(&format!("/tasks/{}", task_id))
        .add_header("Authorization", agent.bearer())
        .json(&json!({ "status": "finished" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = app
        .server
        .put(&format!("/tasks/{}", task_id))
        .add_header("Authorization", agent.bearer())
        .json(&json!({ "title": "x" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = app
        .server
        .get(&format!("/leads/{}/tasks", lead.id))
        .add_header("Authorization", agent.bearer())
        .await;
    let body: Value = response.json();
    assert_eq!(body["tasks"][0]["status"], "open");
    assert_eq!(body["tasks"][0]["title"], "Meet parents");
}

#[tokio::test]
async fn unknown_task_and_lead_are_not_found() {
    let app = create_test_app().await;
    let agent = app.seed_user("Agent", Role::Agent).await;

    let response = app
        .server
        .put("/tasks/does-not-exist")
        .add_header("Authorization", agent.bearer())
        .json(&json!({ "status": "done" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "task not found");

    let response = app
        .server
        .delete("/tasks/does-not-exist")
        .add_header("Authorization", agent.bearer())
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = app
        .server
        .post("/leads/missing-lead/tasks")
        .add_header("Authorization", agent.bearer())
        .json(&json!({ "title": "Orphan", "kind": "call", "status": "open" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_includes_assignee_name_and_delete_removes_task() {
    let app = create_test_app().await;
    let agent = app.seed_user("Tharindu", Role::Agent).await;
    let lead = app.seed_lead("Imesha", None, None, None, None).await;

    let task = create_task(
        &app,
        &agent,
        &lead.id,
        json!({
            "title": "WhatsApp brochure",
            "kind": "whatsapp",
            "status": "in_progress",
            "assigned_to": agent.user.id
        }),
    )
    .await;
    let task_id = task["id"].as_str().unwrap();

    let response = app
        .server
        .get(&format!("/leads/{}/tasks", lead.id))
        .add_header("Authorization", agent.bearer())
        .await;
    let body: Value = response.json();
    assert_eq!(body["total_count"], 1);
    assert_eq!(body["tasks"][0]["assigned_to_name"], "Tharindu");

    let response = app
        .server
        .delete(&format!("/leads/{}/tasks/{}", lead.id, task_id))
        .add_header("Authorization", agent.bearer())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = app
        .server
        .get(&format!("/leads/{}/tasks", lead.id))
        .add_header("Authorization", agent.bearer())
        .await;
    let body: Value = response.json();
    assert_eq!(body["total_count"], 0);
}

#[tokio::test]
async fn failed_completion_insert_rolls_back_task_save() {
    let app = create_test_app().await;
    let agent = app.seed_user("Agent", Role::Agent).await;
    let lead = app.seed_lead("Rollback", None, None, None, None).await;
    let repo = TaskRepositoryImpl::new(app.db.clone());

    let task = Task::new(
        lead.id.clone(),
        "Confirm enrolment".to_string(),
        ActivityKind::Call,
        TaskStatus::Open,
    );
    let mut task = repo.create(&task).await.unwrap();

    task.status = TaskStatus::Done;
    let orphan = Activity::new(
        "missing-lead".to_string(),
        Some(agent.user.id.clone()),
        ActivityKind::Call,
        Some("Task completed: Confirm enrolment".to_string()),
    );

    let result = repo.save_with_completion(&task, Some(&orphan)).await;
    assert!(result.is_err());

    let stored = repo.find_by_id(&task.id).await.unwrap().unwrap();
    assert_eq!(stored.status, TaskStatus::Open);

    let activities = list_activities(&app, &agent, &lead.id).await;
    assert_eq!(activities["total_count"], 0);
}
