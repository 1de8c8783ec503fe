//! Storage Layer
//!
//! Loads the JSON configuration file.

pub mod config;

pub use config::*;
