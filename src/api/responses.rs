//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    state::{Phase, TimerState},
    store::Task,
};

/// Timer snapshot with display values for the host UI
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerResponse {
    pub phase: Phase,
    pub remaining_seconds: u32,
    pub running: bool,
    /// Remaining time as `MM:SS`
    pub display: String,
    pub label: String,
    pub mode: String,
    pub active_task_id: Option<String>,
}

impl TimerResponse {
    pub fn new(timer: TimerState, active_task_id: Option<String>) -> Self {
        Self {
            phase: timer.phase,
            remaining_seconds: timer.remaining_seconds,
            running: timer.running,
            display: timer.display(),
            label: timer.phase.label().to_string(),
            mode: timer.phase.mode().to_string(),
            active_task_id,
        }
    }
}

/// Body of `PUT /api/timer/task`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveTaskRequest {
    pub task_id: Option<String>,
}

/// Response for a deleted task
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteTaskResponse {
    pub message: String,
    pub task: Task,
}

impl DeleteTaskResponse {
    pub fn new(task: Task) -> Self {
        Self {
            message: "Task deleted successfully".to_string(),
            task,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoints {
    pub tasks: String,
    pub sessions: String,
    pub timer: String,
}

/// Root endpoint description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
    pub endpoints: Endpoints,
}

impl RootResponse {
    pub fn running() -> Self {
        Self {
            message: "FocusTools API".to_string(),
            status: "Running".to_string(),
            endpoints: Endpoints {
                tasks: "/api/tasks".to_string(),
                sessions: "/api/sessions".to_string(),
                timer: "/api/timer".to_string(),
            },
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok(uptime: String) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime,
        }
    }
}
