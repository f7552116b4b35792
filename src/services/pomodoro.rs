//! Crediting completed work intervals to the active task

use chrono::Duration;
use tracing::{info, warn};

use crate::{
    error::{AppError, Result},
    state::{AppState, WorkCompleted, WORK_SECONDS},
    store::{NewSession, Task},
};

/// Handle one work-complete notification.
///
/// Increments the pomodoro count of the task that was selected when the
/// interval completed and records a completed session for it. Returns the
/// updated task, or `None` when there was no task to credit.
pub fn record_completed_pomodoro(state: &AppState, event: &WorkCompleted) -> Result<Option<Task>> {
    let Some(task_id) = event.task_id.clone() else {
        info!("Work interval completed with no active task, nothing to record");
        return Ok(None);
    };

    let task = match state.store.increment_pomodoro(&task_id) {
        Ok(task) => task,
        Err(AppError::NotFound(_)) => {
            warn!("Task {} no longer exists, skipping pomodoro credit", task_id);
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    let started = event.completed_at - Duration::seconds(i64::from(WORK_SECONDS));
    state.store.create_session(NewSession {
        task_id: Some(task_id),
        duration: Some(i64::from(WORK_SECONDS)),
        start_time: Some(started),
        completed: Some(true),
    })?;

    info!("Task {:?} now has {} pomodoros", task.title, task.pomodoro_count);
    Ok(Some(task))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::NewTask;
    use chrono::Utc;

    fn state_with_task(title: &str) -> (AppState, Task) {
        let state = AppState::new(0, "127.0.0.1".to_string());
        let task = create(&state, title);
        (state, task)
    }

    fn create(state: &AppState, title: &str) -> Task {
        state
            .store
            .create_task(NewTask {
                title: Some(title.to_string()),
                completed: None,
            })
            .unwrap()
    }

    fn completed_for(task_id: Option<&str>) -> WorkCompleted {
        WorkCompleted {
            completed_at: Utc::now(),
            task_id: task_id.map(str::to_string),
        }
    }

    #[test]
    fn credits_task_and_records_session() {
        let (state, task) = state_with_task("deep work");

        let event = completed_for(Some(task.id.as_str()));
        let updated = record_completed_pomodoro(&state, &event).unwrap().unwrap();
        assert_eq!(updated.pomodoro_count, 1);

        let sessions = state.store.list_sessions().unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].task_id, task.id);
        assert_eq!(sessions[0].duration, 1500);
        assert!(sessions[0].completed);
        assert_eq!(
            event.completed_at - sessions[0].start_time,
            Duration::seconds(1500)
        );
    }

    #[test]
    fn credits_task_selected_at_completion_not_current_selection() {
        let (state, first) = state_with_task("first");
        let second = create(&state, "second");
        state.set_active_task(Some(first.id.clone())).unwrap();

        let event = completed_for(Some(first.id.as_str()));
        state.set_active_task(Some(second.id.clone())).unwrap();

        record_completed_pomodoro(&state, &event).unwrap();
        assert_eq!(state.store.get_task(&first.id).unwrap().pomodoro_count, 1);
        assert_eq!(state.store.get_task(&second.id).unwrap().pomodoro_count, 0);
    }

    #[test]
    fn no_selected_task_changes_nothing() {
        let (state, task) = state_with_task("idle");
        state.set_active_task(Some(task.id.clone())).unwrap();

        assert!(record_completed_pomodoro(&state, &completed_for(None)).unwrap().is_none());
        assert_eq!(state.store.get_task(&task.id).unwrap().pomodoro_count, 0);
        assert!(state.store.list_sessions().unwrap().is_empty());
    }

    #[test]
    fn deleted_task_is_skipped() {
        let (state, task) = state_with_task("gone");
        let event = completed_for(Some(task.id.as_str()));
        state.store.delete_task(&task.id).unwrap();

        assert!(record_completed_pomodoro(&state, &event).unwrap().is_none());
        assert!(state.store.list_sessions().unwrap().is_empty());
    }
}
