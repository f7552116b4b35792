//! Focus timer driver background task

use std::{sync::Arc, time::Duration};
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{interval_at, Instant},
};
use tracing::{debug, error, info};

use crate::state::{AppState, RunSignal};

const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Spawn the task that ticks the focus timer once per second while it runs.
///
/// Aborting the returned handle stops all pending wake-ups.
pub fn spawn_focus_timer(state: Arc<AppState>) -> JoinHandle<()> {
    let running_rx = state.subscribe_running();
    tokio::spawn(focus_timer_task(state, running_rx))
}

/// Background task that drives the focus timer from the tokio clock
pub async fn focus_timer_task(state: Arc<AppState>, mut running_rx: watch::Receiver<RunSignal>) {
    info!("Starting focus timer task");

    loop {
        // Sleep until a control operation starts the countdown
        let mut signal = *running_rx.borrow_and_update();
        while !signal.running {
            if running_rx.changed().await.is_err() {
                info!("Timer state dropped, stopping focus timer task");
                return;
            }
            signal = *running_rx.borrow_and_update();
        }

        debug!("Focus timer running, scheduling ticks");
        let mut generation = signal.generation;
        let mut interval = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);

        loop {
            tokio::select! {
                // Control operations win over a tick that is due at the same time
                biased;

                changed = running_rx.changed() => {
                    if changed.is_err() {
                        info!("Timer state dropped, stopping focus timer task");
                        return;
                    }
                    let signal = *running_rx.borrow_and_update();
                    if !signal.running {
                        debug!("Timer stopped, cancelling pending tick");
                        break;
                    }
                    if signal.generation != generation {
                        // Stopped and restarted since the last poll
                        debug!("Timer restarted, rescheduling ticks");
                        generation = signal.generation;
                        interval.reset();
                    }
                }

                _ = interval.tick() => {
                    match state.tick_timer() {
                        Ok(timer) if !timer.running => {
                            debug!("Countdown stopped at {:?}", timer.phase);
                            break;
                        }
                        Ok(_) => {}
                        Err(e) => {
                            error!("Failed to tick focus timer: {}", e);
                            return;
                        }
                    }
                }
            }
        }
    }
}
