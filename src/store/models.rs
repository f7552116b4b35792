//! Task and session records plus their create/update payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, Result};

/// A unit of work that focus intervals can be credited to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub pomodoro_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/tasks`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewTask {
    pub title: Option<String>,
    pub completed: Option<bool>,
}

/// Body of `PUT /api/tasks/:id`; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub pomodoro_count: Option<i64>,
}

/// A recorded focus session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(rename = "_id")]
    pub id: String,
    pub task_id: String,
    /// Length of the session in seconds
    pub duration: u64,
    pub start_time: DateTime<Utc>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/sessions`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    pub task_id: Option<String>,
    pub duration: Option<i64>,
    pub start_time: Option<DateTime<Utc>>,
    pub completed: Option<bool>,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn validate_title(title: Option<&str>) -> Result<String> {
    match title.map(str::trim) {
        Some(title) if !title.is_empty() => Ok(title.to_string()),
        _ => Err(AppError::validation("Task validation failed: title: Path `title` is required.")),
    }
}

fn validate_count(count: i64) -> Result<u32> {
    u32::try_from(count).map_err(|_| {
        AppError::validation(format!(
            "Task validation failed: pomodoroCount: Path `pomodoroCount` ({}) is out of range.",
            count
        ))
    })
}

impl Task {
    /// Build a validated task from a create payload
    pub fn from_new(new: NewTask, now: DateTime<Utc>) -> Result<Self> {
        Ok(Self {
            id: new_id(),
            title: validate_title(new.title.as_deref())?,
            completed: new.completed.unwrap_or(false),
            pomodoro_count: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Produce the merged record for an update; `self` is never modified
    pub fn patched(&self, patch: TaskPatch, now: DateTime<Utc>) -> Result<Self> {
        let mut task = self.clone();
        if let Some(title) = patch.title {
            task.title = validate_title(Some(title.as_str()))?;
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }
        if let Some(count) = patch.pomodoro_count {
            task.pomodoro_count = validate_count(count)?;
        }
        task.updated_at = now;
        Ok(task)
    }
}

impl Session {
    /// Build a validated session from a create payload
    pub fn from_new(new: NewSession, now: DateTime<Utc>) -> Result<Self> {
        let task_id = match new.task_id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => {
                return Err(AppError::validation(
                    "Session validation failed: taskId: Path `taskId` is required.",
                ))
            }
        };
        let duration = match new.duration {
            Some(d) if d >= 0 => d as u64,
            Some(d) => {
                return Err(AppError::validation(format!(
                    "Session validation failed: duration: Path `duration` ({}) is less than minimum allowed value (0).",
                    d
                )))
            }
            None => {
                return Err(AppError::validation(
                    "Session validation failed: duration: Path `duration` is required.",
                ))
            }
        };

        Ok(Self {
            id: new_id(),
            task_id,
            duration,
            start_time: new.start_time.unwrap_or(now),
            completed: new.completed.unwrap_or(true),
            created_at: now,
            updated_at: now,
        })
    }
}
