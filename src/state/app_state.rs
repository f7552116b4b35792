//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::{broadcast, watch};
use tracing::{debug, info, warn};

use super::{FocusTimer, TimerState};
use crate::{
    error::{AppError, Result},
    store::DocumentStore,
};

/// Notification published each time a work interval runs down to zero
#[derive(Debug, Clone)]
pub struct WorkCompleted {
    pub completed_at: DateTime<Utc>,
    /// Task that was selected when the interval completed
    pub task_id: Option<String>,
}

/// Running flag published to the timer driver.
///
/// `generation` advances whenever a running countdown is stopped, so a
/// stop followed by a restart is visible even if the driver only observes
/// the final `running == true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSignal {
    pub running: bool,
    pub generation: u64,
}

/// Shared state owned by the HTTP handlers and background tasks
#[derive(Debug)]
pub struct AppState {
    /// Task and session records
    pub store: Arc<DocumentStore>,
    /// The focus interval timer
    timer: Mutex<FocusTimer>,
    /// Task credited when a work interval completes
    active_task: Arc<Mutex<Option<String>>>,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Channel for work-complete notifications
    pub work_complete_tx: broadcast::Sender<WorkCompleted>,
    /// Mirrors the timer's running flag for the timer driver
    running_tx: watch::Sender<RunSignal>,
    /// Keep the receiver alive to prevent channel closure
    _running_rx: watch::Receiver<RunSignal>,
}

impl AppState {
    /// Create a new AppState with an empty store and a fresh timer
    pub fn new(port: u16, host: String) -> Self {
        Self::with_store(port, host, Arc::new(DocumentStore::new()))
    }

    pub fn with_store(port: u16, host: String, store: Arc<DocumentStore>) -> Self {
        let (work_complete_tx, _) = broadcast::channel(16);
        let (running_tx, running_rx) = watch::channel(RunSignal::default());
        let active_task: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));

        let notify_tx = work_complete_tx.clone();
        let selected = Arc::clone(&active_task);
        let timer = FocusTimer::new(move || {
            let task_id = match selected.lock() {
                Ok(id) => id.clone(),
                Err(_) => {
                    warn!("Failed to lock active task, completion will not be credited");
                    None
                }
            };
            info!("Work interval completed (active task: {:?})", task_id);
            let event = WorkCompleted { completed_at: Utc::now(), task_id };
            if let Err(e) = notify_tx.send(event) {
                warn!("Failed to send work-complete notification: {}", e);
            }
        });

        Self {
            store,
            timer: Mutex::new(timer),
            active_task,
            start_time: Instant::now(),
            port,
            host,
            work_complete_tx,
            running_tx,
            _running_rx: running_rx,
        }
    }

    /// Apply an operation to the timer and publish the resulting running flag
    fn update_timer<F>(&self, action: &str, op: F) -> Result<TimerState>
    where
        F: FnOnce(&mut FocusTimer),
    {
        let mut timer = self.timer.lock()
            .map_err(|_| AppError::LockPoisoned("timer"))?;

        let was_running = timer.is_running();
        op(&mut timer);
        let new_state = timer.state();
        drop(timer); // Release the lock before notifying the driver

        debug!("Timer {}: {:?}", action, new_state);
        self.running_tx.send_modify(|signal| {
            if was_running && !new_state.running {
                signal.generation += 1;
            }
            signal.running = new_state.running;
        });

        Ok(new_state)
    }

    pub fn start_timer(&self) -> Result<TimerState> {
        self.update_timer("start", FocusTimer::start)
    }

    pub fn pause_timer(&self) -> Result<TimerState> {
        self.update_timer("pause", FocusTimer::pause)
    }

    pub fn toggle_timer(&self) -> Result<TimerState> {
        self.update_timer("toggle", FocusTimer::toggle)
    }

    pub fn reset_timer(&self) -> Result<TimerState> {
        self.update_timer("reset", FocusTimer::reset)
    }

    /// Advance the timer by one second. Only the timer driver calls this.
    pub(crate) fn tick_timer(&self) -> Result<TimerState> {
        self.update_timer("tick", FocusTimer::tick)
    }

    /// Get current timer state
    pub fn get_timer_state(&self) -> Result<TimerState> {
        self.timer.lock()
            .map(|timer| timer.state())
            .map_err(|_| AppError::LockPoisoned("timer"))
    }

    /// Watch the timer's running flag
    pub fn subscribe_running(&self) -> watch::Receiver<RunSignal> {
        self.running_tx.subscribe()
    }

    /// Subscribe to work-complete notifications
    pub fn subscribe_work_complete(&self) -> broadcast::Receiver<WorkCompleted> {
        self.work_complete_tx.subscribe()
    }

    pub fn active_task(&self) -> Result<Option<String>> {
        self.active_task.lock()
            .map(|id| id.clone())
            .map_err(|_| AppError::LockPoisoned("active task"))
    }

    /// Select the task that receives credit for completed work intervals.
    /// `None` clears the selection.
    pub fn set_active_task(&self, task_id: Option<String>) -> Result<Option<String>> {
        if let Some(id) = &task_id {
            if !self.store.contains_task(id)? {
                return Err(AppError::NotFound("Task"));
            }
        }

        let mut active = self.active_task.lock()
            .map_err(|_| AppError::LockPoisoned("active task"))?;
        info!("Active task set to: {:?}", task_id);
        *active = task_id.clone();
        Ok(task_id)
    }

    /// Drop the selection if it points at `task_id`
    pub fn clear_active_task_if(&self, task_id: &str) -> Result<()> {
        let mut active = self.active_task.lock()
            .map_err(|_| AppError::LockPoisoned("active task"))?;
        if active.as_deref() == Some(task_id) {
            info!("Active task {} was deleted, clearing selection", task_id);
            *active = None;
        }
        Ok(())
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
