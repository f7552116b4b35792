use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use focus_tools::{create_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> (Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(0, "127.0.0.1".to_string()));
    (create_router(Arc::clone(&state)), state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_task(app: &Router, title: &str) -> Value {
    let (status, task) = send(app, Method::POST, "/api/tasks", Some(json!({ "title": title }))).await;
    assert_eq!(status, StatusCode::CREATED);
    task
}

#[tokio::test]
async fn root_describes_endpoints() {
    let (app, _) = app();
    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "Running");
    assert_eq!(body["endpoints"]["tasks"], "/api/tasks");
}

#[tokio::test]
async fn health_reports_ok() {
    let (app, _) = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn task_crud_lifecycle() {
    let (app, _) = app();

    let task = create_task(&app, "Write tests").await;
    assert_eq!(task["completed"], false);
    assert_eq!(task["pomodoroCount"], 0);
    let id = task["_id"].as_str().unwrap().to_string();
    let uri = format!("/api/tasks/{}", id);

    let (status, list) = send(&app, Method::GET, "/api/tasks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);

    let (status, fetched) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "Write tests");

    let (status, updated) = send(&app, Method::PUT, &uri, Some(json!({ "completed": true }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["title"], "Write tests");

    let (status, deleted) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], "Task deleted successfully");
    assert_eq!(deleted["task"]["_id"], id.as_str());

    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Task not found");
}

#[tokio::test]
async fn invalid_tasks_are_rejected() {
    let (app, _) = app();

    let (status, body) = send(&app, Method::POST, "/api/tasks", Some(json!({ "title": "  " }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation error");

    let task = create_task(&app, "Count").await;
    let uri = format!("/api/tasks/{}", task["_id"].as_str().unwrap());
    let (status, _) = send(&app, Method::PUT, &uri, Some(json!({ "pomodoroCount": -2 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::PUT, "/api/tasks/unknown", Some(json!({ "completed": true }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/api/tasks/unknown", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn sessions_are_recorded_and_listed() {
    let (app, _) = app();

    let (status, session) = send(
        &app,
        Method::POST,
        "/api/sessions",
        Some(json!({
            "taskId": "task-1",
            "duration": 1500,
            "startTime": "2024-05-01T09:00:00Z"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(session["completed"], true);
    assert_eq!(session["taskId"], "task-1");

    let (status, _) = send(&app, Method::POST, "/api/sessions", Some(json!({ "duration": 60 }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, list) = send(&app, Method::GET, "/api/sessions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn timer_controls_report_state() {
    let (app, _) = app();

    let (status, timer) = send(&app, Method::GET, "/api/timer", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(timer["phase"], "work");
    assert_eq!(timer["remainingSeconds"], 1500);
    assert_eq!(timer["running"], false);
    assert_eq!(timer["display"], "25:00");
    assert_eq!(timer["label"], "Focus Time");
    assert_eq!(timer["mode"], "work-mode");

    let (_, timer) = send(&app, Method::POST, "/api/timer/start", None).await;
    assert_eq!(timer["running"], true);

    let (_, timer) = send(&app, Method::POST, "/api/timer/toggle", None).await;
    assert_eq!(timer["running"], false);

    let (_, timer) = send(&app, Method::POST, "/api/timer/toggle", None).await;
    assert_eq!(timer["running"], true);

    let (_, timer) = send(&app, Method::POST, "/api/timer/pause", None).await;
    assert_eq!(timer["running"], false);

    let (_, timer) = send(&app, Method::POST, "/api/timer/reset", None).await;
    assert_eq!(timer["remainingSeconds"], 1500);
    assert_eq!(timer["running"], false);
}

#[tokio::test]
async fn active_task_selection() {
    let (app, state) = app();
    let task = create_task(&app, "Focus").await;
    let id = task["_id"].as_str().unwrap();

    let (status, _) = send(&app, Method::PUT, "/api/timer/task", Some(json!({ "taskId": "missing" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, timer) = send(&app, Method::PUT, "/api/timer/task", Some(json!({ "taskId": id }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(timer["activeTaskId"], id);

    // Deleting the selected task clears the selection
    send(&app, Method::DELETE, &format!("/api/tasks/{}", id), None).await;
    assert_eq!(state.active_task().unwrap(), None);

    let (_, timer) = send(&app, Method::PUT, "/api/timer/task", Some(json!({ "taskId": null }))).await;
    assert_eq!(timer["activeTaskId"], Value::Null);
}
