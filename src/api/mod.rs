//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod error;
pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/api/tasks", post(create_task_handler).get(list_tasks_handler))
        .route(
            "/api/tasks/:id",
            get(get_task_handler)
                .put(update_task_handler)
                .delete(delete_task_handler),
        )
        .route("/api/sessions", post(create_session_handler).get(list_sessions_handler))
        .route("/api/timer", get(timer_status_handler))
        .route("/api/timer/start", post(timer_start_handler))
        .route("/api/timer/pause", post(timer_pause_handler))
        .route("/api/timer/toggle", post(timer_toggle_handler))
        .route("/api/timer/reset", post(timer_reset_handler))
        .route("/api/timer/task", put(active_task_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
