//! Services
//!
//! The relay reacting to lifecycle events, the webhook delivery it uses, and
//! the stdin bridge that lets an out-of-process host drive it.

pub mod bridge;
pub mod relay;
pub mod webhook;

pub use bridge::{run_event_stream, BridgeSummary};
pub use relay::NotificationRelay;
pub use webhook::{SlackChannel, SlackPayload, WebhookChannel};
