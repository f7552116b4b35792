//! State management module
//!
//! This module contains the focus timer state machine and the shared
//! application state that owns it.

pub mod app_state;
pub mod timer_state;

// Re-export main types
pub use app_state::{AppState, RunSignal, WorkCompleted};
pub use timer_state::{format_time, FocusTimer, Phase, TimerState, BREAK_SECONDS, WORK_SECONDS};
