//! Integration Tests Module
//!
//! Drives the notification relay through its public API with a recording
//! webhook channel and a manual clock. No network traffic is generated.

// Shared recording channel and relay fixtures
mod support;

// Relay lifecycle behaviour: enable gating, message text, timing
mod relay_test;

// Line-oriented event bridge feeding a relay
mod bridge_test;
