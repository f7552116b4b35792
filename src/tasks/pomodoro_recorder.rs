//! Pomodoro recorder background task

use std::sync::Arc;
use tokio::{
    sync::broadcast::{self, error::RecvError},
    task::JoinHandle,
};
use tracing::{error, info, warn};

use crate::{
    services::record_completed_pomodoro,
    state::{AppState, WorkCompleted},
};

/// Spawn the task that credits completed work intervals.
///
/// The subscription is taken before spawning so no notification sent after
/// this call returns is missed.
pub fn spawn_pomodoro_recorder(state: Arc<AppState>) -> JoinHandle<()> {
    let work_rx = state.subscribe_work_complete();
    tokio::spawn(pomodoro_recorder_task(state, work_rx))
}

/// Background task that listens for work-complete notifications
pub async fn pomodoro_recorder_task(
    state: Arc<AppState>,
    mut work_rx: broadcast::Receiver<WorkCompleted>,
) {
    info!("Starting pomodoro recorder task");

    loop {
        match work_rx.recv().await {
            Ok(event) => {
                if let Err(e) = record_completed_pomodoro(&state, &event) {
                    error!("Failed to record completed pomodoro: {}", e);
                }
            }
            Err(RecvError::Lagged(missed)) => {
                warn!("Pomodoro recorder lagged, {} notifications dropped", missed);
            }
            Err(RecvError::Closed) => {
                info!("Work-complete channel closed, stopping pomodoro recorder");
                return;
            }
        }
    }
}
