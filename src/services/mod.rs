//! Host-side services module
//! 
//! This module contains the application logic that reacts to timer
//! notifications, keeping the timer itself unaware of tasks and storage.

pub mod pomodoro;

// Re-export main functions
pub use pomodoro::record_completed_pomodoro;
