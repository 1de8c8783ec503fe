//! Core Error Types
//!
//! Errors raised while decoding lifecycle events handed over by the host
//! runtime. Kept free of HTTP and filesystem concerns; the application crate
//! wraps these in its own error type.

use thiserror::Error;

/// Core error type for the playbook-notify workspace.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Malformed event input
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Structurally valid input with invalid content
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for core errors
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
