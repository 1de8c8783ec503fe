//! Playbook Notify
//!
//! Posts playbook run status to a Slack incoming webhook.
//! It includes:
//! - The notification relay implementing the lifecycle callback contract
//! - Slack payload construction and blocking webhook delivery
//! - Configuration loading (JSON file plus environment overrides)
//! - A line-oriented bridge for hosts running in another process

pub mod models;
pub mod services;
pub mod storage;
pub mod utils;

pub use playbook_notify_core::{
    AggregateStats, CallbackEvent, HostStats, PlayStart, PlaybookCallback, TaskResult,
};

pub use models::settings::{NotifyConfig, ProxyConfig};
pub use services::relay::{Clock, ManualClock, StaticUser, SystemClock, UserResolver};
pub use services::{run_event_stream, BridgeSummary, NotificationRelay, SlackChannel, SlackPayload, WebhookChannel};
pub use storage::ConfigService;
pub use utils::error::{NotifyError, NotifyResult};
