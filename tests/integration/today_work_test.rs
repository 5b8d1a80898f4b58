// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::integration::helpers::{create_test_app, days_ago, TestApp, TestUser};
use axum::http::StatusCode;
use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use crmrs::domain::models::activity::{Activity, ActivityKind};
use crmrs::domain::models::task::{Task, TaskStatus};
use crmrs::domain::models::user::Role;
use crmrs::domain::repositories::activity_repository::ActivityRepository;
use crmrs::domain::repositories::lead_repository::LeadRepository;
use crmrs::domain::repositories::task_repository::TaskRepository;
use crmrs::infrastructure::repositories::activity_repo_impl::ActivityRepositoryImpl;
use crmrs::infrastructure::repositories::lead_repo_impl::LeadRepositoryImpl;
use crmrs::infrastructure::repositories::task_repo_impl::TaskRepositoryImpl;
use serde_json::{json, Value};

fn at(month: u32, day: u32) -> DateTime<FixedOffset> {
    Utc.with_ymd_and_hms(2024, month, day, 9, 0, 0)
        .unwrap()
        .fixed_offset()
}

async fn today(app: &TestApp, user: &TestUser, query: &str) -> (StatusCode, Value) {
    let response = app
        .server
        .get(&format!("/tasks/today{}", query))
        .add_header("Authorization", user.bearer())
        .await;
    let status = response.status_code();
    let body = if status == StatusCode::OK {
        response.json()
    } else {
        Value::Null
    };
    (status, body)
}

fn lead_ids(body: &Value) -> Vec<String> {
    body["follow_up_call_tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["lead_id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn agent_cannot_view_other_users_work() {
    let app = create_test_app().await;
    let agent = app.seed_user("Agent", Role::Agent).await;
    let other = app.seed_user("Other", Role::Agent).await;

    let (status, _) = today(&app, &agent, &format!("?assigned_to={}", other.user.id)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = today(&app, &agent, &format!("?assigned_to={}", agent.user.id)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn coordinator_can_view_other_users_work() {
    let app = create_test_app().await;
    let coordinator = app.seed_user("Coordinator", Role::Coordinator).await;
    let agent = app.seed_user("Agent", Role::Agent).await;
    let lead = app
        .seed_lead("Due Lead", Some("New"), Some(&agent.user.id), Some(days_ago(10)), None)
        .await;

    let (status, body) =
        today(&app, &coordinator, &format!("?assigned_to={}", agent.user.id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(lead_ids(&body), vec![lead.id]);
    assert_eq!(body["total_follow_up_calls"], 1);
}

#[tokio::test]
async fn follow_ups_respect_interval_and_closed_statuses() {
    let app = create_test_app().await;
    let agent = app.seed_user("Agent", Role::Agent).await;
    let other = app.seed_user("Other", Role::Agent).await;
    let uid = agent.user.id.as_str();

    let overdue = app
        .seed_lead("Overdue", Some("New"), Some(uid), Some(days_ago(9)), None)
        .await;
    let due_today = app
        .seed_lead("Due Today", None, Some(uid), Some(days_ago(3)), None)
        .await;
    let by_created_at = app
        .seed_lead("Old Intake", Some("In Progress"), Some(uid), None, Some(days_ago(5)))
        .await;
    let lowercase_closed = app
        .seed_lead("Lowercase", Some("closed"), Some(uid), Some(days_ago(20)), None)
        .await;

    app.seed_lead("Recent", Some("New"), Some(uid), Some(days_ago(1)), None).await;
    app.seed_lead("Cancelled", Some("cancelled"), Some(uid), Some(days_ago(20)), None).await;
    app.seed_lead("Done", Some("done"), Some(uid), Some(days_ago(20)), None).await;
    app.seed_lead("Closed", Some("Closed"), Some(uid), Some(days_ago(20)), None).await;
    app.seed_lead("Not Mine", Some("New"), Some(&other.user.id), Some(days_ago(20)), None).await;
    app.seed_lead("Unallocated", Some("New"), None, Some(days_ago(20)), None).await;

    let (status, body) = today(&app, &agent, "").await;
    assert_eq!(status, StatusCode::OK);

    // sorted by due date ascending
    assert_eq!(
        lead_ids(&body),
        vec![
            lowercase_closed.id.clone(),
            overdue.id.clone(),
            by_created_at.id.clone(),
            due_today.id.clone(),
        ]
    );
    assert_eq!(body["total_follow_up_calls"], 4);
    assert!(body["follow_up_call_tasks"][0]["due_at"].is_string());
}

#[tokio::test]
async fn recent_follow_up_call_resets_due_date() {
    let app = create_test_app().await;
    let agent = app.seed_user("Agent", Role::Agent).await;
    let called = app
        .seed_lead("Called", Some("In Progress"), Some(&agent.user.id), Some(days_ago(10)), None)
        .await;
    let emailed = app
        .seed_lead("Emailed", Some("In Progress"), Some(&agent.user.id), Some(days_ago(10)), None)
        .await;

    let response = app
        .server
        .post(&format!("/leads/{}/activities", called.id))
        .add_header("Authorization", agent.bearer())
        .json(&json!({ "kind": "follow_up_call", "summary": "Discussed intake" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    // other kinds do not count as a follow-up call
    let response = app
        .server
        .post(&format!("/leads/{}/activities", emailed.id))
        .add_header("Authorization", agent.bearer())
        .json(&json!({ "kind": "email" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let (_, body) = today(&app, &agent, "").await;
    assert_eq!(lead_ids(&body), vec![emailed.id]);
}

#[tokio::test]
async fn open_tasks_are_paginated_and_ordered() {
    let app = create_test_app().await;
    let agent = app.seed_user("Agent", Role::Agent).await;
    let lead = app.seed_lead("Task Lead", None, None, None, None).await;
    let uid = agent.user.id.clone();

    let tasks = [
        json!({ "title": "No due date", "kind": "call", "status": "open", "assigned_to": uid }),
        json!({ "title": "Due later", "kind": "call", "status": "in_progress",
                "due_date": "2030-01-10T09:00:00Z", "assigned_to": uid }),
        json!({ "title": "Due sooner", "kind": "email", "status": "open",
                "due_date": "2030-01-05T09:00:00Z", "assigned_to": uid }),
        json!({ "title": "Finished", "kind": "call", "status": "done", "assigned_to": uid }),
        json!({ "title": "Someone else", "kind": "call", "status": "open" }),
    ];
    for task in tasks {
        let response = app
            .server
            .post(&format!("/leads/{}/tasks", lead.id))
            .add_header("Authorization", agent.bearer())
            .json(&task)
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
    }

    let (_, body) = today(&app, &agent, "").await;
    let titles: Vec<&str> = body["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Due sooner", "Due later", "No due date"]);
    assert_eq!(body["total_tasks"], 3);
    assert_eq!(body["tasks"][0]["assigned_to_name"], "Agent");
    assert_eq!(body["limit"], 50);
    assert_eq!(body["offset"], 0);

    let (_, body) = today(&app, &agent, "?limit=1&offset=1").await;
    assert_eq!(body["tasks"].as_array().unwrap().len(), 1);
    assert_eq!(body["tasks"][0]["title"], "Due later");
    assert_eq!(body["total_tasks"], 3);

    let (status, body) = today(&app, &agent, "?limit=0&offset=-4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["limit"], 50);
    assert_eq!(body["offset"], 0);

    let (_, body) = today(&app, &agent, "?limit=abc&offset=xyz").await;
    assert_eq!(body["limit"], 50);
    assert_eq!(body["offset"], 0);
}

#[tokio::test]
async fn tasks_sharing_a_due_date_list_newest_first() {
    let app = create_test_app().await;
    let agent = app.seed_user("Agent", Role::Agent).await;
    let lead = app.seed_lead("Tie Lead", None, None, None, None).await;
    let repo = TaskRepositoryImpl::new(app.db.clone());

    let seeds = [
        ("Same due, older", Some(at(6, 1)), at(1, 1)),
        ("No due, newer", None, at(3, 1)),
        ("Same due, newer", Some(at(6, 1)), at(2, 1)),
        ("No due, older", None, at(1, 15)),
    ];
    for (title, due_date, created_at) in seeds {
        let mut task = Task::new(
            lead.id.clone(),
            title.to_string(),
            ActivityKind::Call,
            TaskStatus::Open,
        );
        task.due_date = due_date;
        task.created_at = created_at;
        task.assigned_to = Some(agent.user.id.clone());
        repo.create(&task).await.unwrap();
    }

    let (_, body) = today(&app, &agent, "").await;
    let titles: Vec<&str> = body["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec!["Same due, newer", "Same due, older", "No due, newer", "No due, older"]
    );
}

#[tokio::test]
async fn candidate_lookup_keeps_latest_call_per_open_lead() {
    let app = create_test_app().await;
    let agent = app.seed_user("Agent", Role::Agent).await;
    let other = app.seed_user("Other", Role::Agent).await;
    let uid = agent.user.id.clone();

    let called = app
        .seed_lead("Called", Some("In Progress"), Some(&uid), Some(at(1, 1)), None)
        .await;
    let silent = app
        .seed_lead("Silent", None, Some(&uid), Some(at(1, 2)), None)
        .await;
    let closed = app
        .seed_lead("Closed", Some("Closed"), Some(&uid), Some(at(1, 3)), None)
        .await;
    let foreign = app
        .seed_lead("Foreign", None, Some(&other.user.id), Some(at(1, 4)), None)
        .await;

    let activities = ActivityRepositoryImpl::new(app.db.clone());
    let calls = [
        (&called.id, ActivityKind::FollowUpCall, at(1, 9)),
        (&called.id, ActivityKind::FollowUpCall, at(1, 20)),
        (&called.id, ActivityKind::FollowUpCall, at(1, 12)),
        (&called.id, ActivityKind::Email, at(2, 1)),
        (&closed.id, ActivityKind::FollowUpCall, at(1, 25)),
        (&foreign.id, ActivityKind::FollowUpCall, at(1, 26)),
    ];
    for (lead_id, kind, occurred_at) in calls {
        let mut activity = Activity::new(lead_id.clone(), Some(uid.clone()), kind, None);
        activity.occurred_at = occurred_at;
        activities.record(&activity).await.unwrap();
    }

    let leads = LeadRepositoryImpl::new(app.db.clone());
    let mut candidates = leads.find_follow_up_candidates(&uid).await.unwrap();
    candidates.sort_by(|a, b| a.lead_name.cmp(&b.lead_name));

    let ids: Vec<&str> = candidates.iter().map(|c| c.lead_id.as_str()).collect();
    assert_eq!(ids, vec![called.id.as_str(), silent.id.as_str()]);
    assert_eq!(candidates[0].last_follow_up_at, Some(at(1, 20)));
    assert_eq!(candidates[1].last_follow_up_at, None);
}
