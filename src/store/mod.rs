//! In-memory document store for tasks and sessions
//!
//! Records are kept in insertion order and addressed by opaque string ids.

pub mod models;

use std::sync::Mutex;

use chrono::Utc;
use tracing::{debug, info};

use crate::error::{AppError, Result};
pub use models::{NewSession, NewTask, Session, Task, TaskPatch};

#[derive(Debug, Default)]
pub struct DocumentStore {
    tasks: Mutex<Vec<Task>>,
    sessions: Mutex<Vec<Session>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_tasks<T>(&self, f: impl FnOnce(&mut Vec<Task>) -> Result<T>) -> Result<T> {
        let mut tasks = self.tasks.lock().map_err(|_| AppError::LockPoisoned("task store"))?;
        f(&mut tasks)
    }

    fn with_sessions<T>(&self, f: impl FnOnce(&mut Vec<Session>) -> Result<T>) -> Result<T> {
        let mut sessions = self
            .sessions
            .lock()
            .map_err(|_| AppError::LockPoisoned("session store"))?;
        f(&mut sessions)
    }

    pub fn create_task(&self, new: NewTask) -> Result<Task> {
        let task = Task::from_new(new, Utc::now())?;
        self.with_tasks(|tasks| {
            tasks.push(task.clone());
            Ok(())
        })?;
        info!("Created task {} ({:?})", task.id, task.title);
        Ok(task)
    }

    pub fn list_tasks(&self) -> Result<Vec<Task>> {
        self.with_tasks(|tasks| Ok(tasks.clone()))
    }

    pub fn get_task(&self, id: &str) -> Result<Task> {
        self.with_tasks(|tasks| {
            tasks
                .iter()
                .find(|t| t.id == id)
                .cloned()
                .ok_or(AppError::NotFound("Task"))
        })
    }

    pub fn contains_task(&self, id: &str) -> Result<bool> {
        self.with_tasks(|tasks| Ok(tasks.iter().any(|t| t.id == id)))
    }

    /// Merge `patch` into the stored task and return the updated record
    pub fn update_task(&self, id: &str, patch: TaskPatch) -> Result<Task> {
        let updated = self.with_tasks(|tasks| {
            let slot = tasks
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or(AppError::NotFound("Task"))?;
            *slot = slot.patched(patch, Utc::now())?;
            Ok(slot.clone())
        })?;
        debug!("Updated task {}", id);
        Ok(updated)
    }

    /// Remove a task, returning the record that was deleted
    pub fn delete_task(&self, id: &str) -> Result<Task> {
        let removed = self.with_tasks(|tasks| {
            let index = tasks
                .iter()
                .position(|t| t.id == id)
                .ok_or(AppError::NotFound("Task"))?;
            Ok(tasks.remove(index))
        })?;
        info!("Deleted task {}", id);
        Ok(removed)
    }

    /// Credit one completed work interval to a task
    pub fn increment_pomodoro(&self, id: &str) -> Result<Task> {
        self.with_tasks(|tasks| {
            let task = tasks
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or(AppError::NotFound("Task"))?;
            task.pomodoro_count = task.pomodoro_count.saturating_add(1);
            task.updated_at = Utc::now();
            Ok(task.clone())
        })
    }

    pub fn create_session(&self, new: NewSession) -> Result<Session> {
        let session = Session::from_new(new, Utc::now())?;
        self.with_sessions(|sessions| {
            sessions.push(session.clone());
            Ok(())
        })?;
        info!(
            "Recorded session {} for task {} ({}s)",
            session.id, session.task_id, session.duration
        );
        Ok(session)
    }

    pub fn list_sessions(&self) -> Result<Vec<Session>> {
        self.with_sessions(|sessions| Ok(sessions.clone()))
    }
}
