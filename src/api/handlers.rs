//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::info;

use crate::{
    error::AppError,
    state::{AppState, TimerState},
    store::{NewSession, NewTask, Session, Task, TaskPatch},
};
use super::responses::{
    ActiveTaskRequest, DeleteTaskResponse, HealthResponse, RootResponse, TimerResponse,
};

type ApiResult<T> = Result<T, AppError>;

/// Handle GET / - Describe the API
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse::running())
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.get_uptime()))
}

// ====== Tasks ======

/// Handle POST /api/tasks - Create a task
pub async fn create_task_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewTask>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let task = state.store.create_task(body)?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Handle GET /api/tasks - List all tasks
pub async fn list_tasks_handler(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Task>>> {
    Ok(Json(state.store.list_tasks()?))
}

/// Handle GET /api/tasks/:id - Fetch one task
pub async fn get_task_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Task>> {
    Ok(Json(state.store.get_task(&id)?))
}

/// Handle PUT /api/tasks/:id - Update the given fields of a task
pub async fn update_task_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<TaskPatch>,
) -> ApiResult<Json<Task>> {
    Ok(Json(state.store.update_task(&id, patch)?))
}

/// Handle DELETE /api/tasks/:id - Delete a task
pub async fn delete_task_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteTaskResponse>> {
    let task = state.store.delete_task(&id)?;
    state.clear_active_task_if(&task.id)?;
    Ok(Json(DeleteTaskResponse::new(task)))
}

// ====== Sessions ======

/// Handle POST /api/sessions - Record a focus session
pub async fn create_session_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewSession>,
) -> ApiResult<(StatusCode, Json<Session>)> {
    let session = state.store.create_session(body)?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// Handle GET /api/sessions - List all sessions
pub async fn list_sessions_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Session>>> {
    Ok(Json(state.store.list_sessions()?))
}

// ====== Timer ======

fn timer_response(state: &AppState, timer: TimerState) -> ApiResult<Json<TimerResponse>> {
    Ok(Json(TimerResponse::new(timer, state.active_task()?)))
}

/// Handle GET /api/timer - Current timer state
pub async fn timer_status_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<TimerResponse>> {
    let timer = state.get_timer_state()?;
    timer_response(&state, timer)
}

/// Handle POST /api/timer/start
pub async fn timer_start_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<TimerResponse>> {
    let timer = state.start_timer()?;
    info!("Timer start requested - {} {}", timer.phase.label(), timer.display());
    timer_response(&state, timer)
}

/// Handle POST /api/timer/pause
pub async fn timer_pause_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<TimerResponse>> {
    let timer = state.pause_timer()?;
    info!("Timer paused at {}", timer.display());
    timer_response(&state, timer)
}

/// Handle POST /api/timer/toggle
pub async fn timer_toggle_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<TimerResponse>> {
    let timer = state.toggle_timer()?;
    info!("Timer toggled, running={}", timer.running);
    timer_response(&state, timer)
}

/// Handle POST /api/timer/reset
pub async fn timer_reset_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<TimerResponse>> {
    let timer = state.reset_timer()?;
    info!("Timer reset");
    timer_response(&state, timer)
}

/// Handle PUT /api/timer/task - Select the task to credit
pub async fn active_task_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ActiveTaskRequest>,
) -> ApiResult<Json<TimerResponse>> {
    state.set_active_task(body.task_id)?;
    let timer = state.get_timer_state()?;
    timer_response(&state, timer)
}
