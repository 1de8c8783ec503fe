//! Error Handling
//!
//! Unified error type for the notifier.
//! Uses thiserror for ergonomic error definitions.

use playbook_notify_core::CoreError;
use thiserror::Error;

/// Notifier-wide error type
#[derive(Error, Debug)]
pub enum NotifyError {
    /// The invoking user could not be determined
    #[error("Identity error: {0}")]
    Identity(String),

    /// Webhook delivery failed (connection, DNS, non-2xx status)
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Event decoding errors
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for notifier errors
pub type NotifyResult<T> = Result<T, NotifyError>;

impl NotifyError {
    /// Create an identity error
    pub fn identity(msg: impl Into<String>) -> Self {
        Self::Identity(msg.into())
    }

    /// Create an HTTP error
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

impl From<reqwest::Error> for NotifyError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}
