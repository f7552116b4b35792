//! Focus interval timer: alternating work and break countdowns

use std::fmt;

use serde::{Deserialize, Serialize};

/// Length of a work interval in seconds (25 minutes)
pub const WORK_SECONDS: u32 = 25 * 60;
/// Length of a break interval in seconds (5 minutes)
pub const BREAK_SECONDS: u32 = 5 * 60;

/// Which interval type is currently counting down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Work,
    Break,
}

impl Phase {
    /// Full countdown length of this phase in seconds
    pub fn duration(&self) -> u32 {
        match self {
            Phase::Work => WORK_SECONDS,
            Phase::Break => BREAK_SECONDS,
        }
    }

    /// Human readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Work => "Focus Time",
            Phase::Break => "Break Time",
        }
    }

    /// Styling hint for the host UI
    pub fn mode(&self) -> &'static str {
        match self {
            Phase::Work => "work-mode",
            Phase::Break => "break-mode",
        }
    }
}

/// Snapshot of the timer's countdown state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    pub phase: Phase,
    pub remaining_seconds: u32,
    pub running: bool,
}

impl TimerState {
    /// Canonical initial state: a full, stopped work interval
    pub fn new() -> Self {
        Self {
            phase: Phase::Work,
            remaining_seconds: WORK_SECONDS,
            running: false,
        }
    }

    /// Remaining time formatted as `MM:SS`
    pub fn display(&self) -> String {
        format_time(self.remaining_seconds)
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Callback invoked once each time a work interval reaches zero
pub type WorkCompleteCallback = Box<dyn FnMut() + Send>;

/// Work/break countdown state machine.
///
/// The timer has no notion of wall-clock time. An external driver calls
/// [`FocusTimer::tick`] once per elapsed second while the timer is running;
/// the host only sees the control operations and the work-complete callback.
pub struct FocusTimer {
    state: TimerState,
    on_work_complete: WorkCompleteCallback,
}

impl FocusTimer {
    /// Create a timer in the initial state with the given completion callback
    pub fn new<F>(on_work_complete: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        Self {
            state: TimerState::new(),
            on_work_complete: Box::new(on_work_complete),
        }
    }

    /// Current state snapshot
    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Resume the countdown. No-op when already running or at zero.
    pub fn start(&mut self) {
        if self.state.remaining_seconds > 0 {
            self.state.running = true;
        }
    }

    /// Halt the countdown, keeping the remaining time
    pub fn pause(&mut self) {
        self.state.running = false;
    }

    /// Pause if running, otherwise start
    pub fn toggle(&mut self) {
        if self.state.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Return to a full, stopped work interval regardless of current phase
    pub fn reset(&mut self) {
        self.state = TimerState::new();
    }

    /// Apply one elapsed second.
    ///
    /// Ignored unless running. Reaching zero stops the countdown and switches
    /// phase; only the Work -> Break switch fires the callback. The next phase
    /// does not start on its own.
    pub(crate) fn tick(&mut self) {
        if !self.state.running || self.state.remaining_seconds == 0 {
            return;
        }

        self.state.remaining_seconds -= 1;
        if self.state.remaining_seconds > 0 {
            return;
        }

        self.state.running = false;
        match self.state.phase {
            Phase::Work => {
                (self.on_work_complete)();
                self.state.phase = Phase::Break;
                self.state.remaining_seconds = BREAK_SECONDS;
            }
            Phase::Break => {
                self.state.phase = Phase::Work;
                self.state.remaining_seconds = WORK_SECONDS;
            }
        }
    }
}

impl fmt::Debug for FocusTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusTimer")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Format a second count as zero-padded `MM:SS`
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
