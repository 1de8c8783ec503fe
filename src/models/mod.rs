//! Data Models
//!
//! Configuration structures for the notifier.

pub mod settings;

pub use settings::*;
