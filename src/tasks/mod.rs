//! Background tasks module
//! 
//! This module contains background tasks that run alongside the HTTP server.

pub mod focus_timer;
pub mod pomodoro_recorder;

// Re-export main functions
pub use focus_timer::{focus_timer_task, spawn_focus_timer};
pub use pomodoro_recorder::{pomodoro_recorder_task, spawn_pomodoro_recorder};
