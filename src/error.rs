//! Application error type shared by the store and application state

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// A record failed schema validation
    #[error("{0}")]
    Validation(String),
    /// No record of the given kind exists for the requested id
    #[error("{0} not found")]
    NotFound(&'static str),
    /// A mutex guarding shared state was poisoned by a panicking holder
    #[error("Failed to lock {0}")]
    LockPoisoned(&'static str),
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
