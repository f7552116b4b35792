//! Focus Tools - A task list server with a Pomodoro-style focus timer
//! 
//! This library provides task and session storage, an HTTP API over it, and
//! a work/break interval timer that credits completed work intervals to the
//! selected task.

pub mod config;
pub mod error;
pub mod state;
pub mod store;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::AppError;
pub use state::AppState;
pub use api::create_router;
pub use utils::signals::shutdown_signal;
