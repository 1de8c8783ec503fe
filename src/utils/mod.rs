//! Utilities
//!
//! Common utilities used throughout the notifier.

pub mod error;
pub mod paths;

pub use error::*;
pub use paths::*;
