//! Run Notification Relay
//!
//! Turns playbook lifecycle events into Slack messages: a start message when
//! a play opts in, a per-host recap and a completion message when the run
//! finishes, and (optionally) task failure messages in between.

pub mod environment;
pub mod format;
pub mod service;

pub use environment::{Clock, EnvUserResolver, ManualClock, StaticUser, SystemClock, UserResolver};
pub use service::{NotificationRelay, ENABLE_VAR};
