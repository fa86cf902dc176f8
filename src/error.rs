//! Application error types.
//!
//! The classification core never fails; these cover the surfaces around it
//! (git, input and output). Configuration failures surface as
//! [`ConfigError`](crate::config::ConfigError).

use thiserror::Error;

/// Application-level errors for swagger-scout.
#[derive(Error, Debug)]
pub enum AppError {
    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Git error: {message}")]
    GitMessage { message: String },

    #[error("Repository not found at: {0}")]
    RepoNotFound(String),

    // Input/output errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Output rendering failed: {0}")]
    Output(String),
}
