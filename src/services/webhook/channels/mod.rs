//! Webhook Channel Trait
//!
//! Defines the trait every delivery channel implements, plus channel module
//! exports.

pub mod slack;

use super::types::SlackPayload;
use crate::utils::error::NotifyResult;

/// Synchronous delivery channel.
///
/// `send` blocks the calling thread until the endpoint has answered. Errors
/// are returned as-is; channels never retry.
pub trait WebhookChannel: Send {
    /// Channel identifier used in log lines.
    fn name(&self) -> &str;

    /// Deliver a payload.
    fn send(&self, payload: &SlackPayload) -> NotifyResult<()>;

    /// Render the payload into the request body this channel would send.
    fn format_message(&self, payload: &SlackPayload) -> NotifyResult<String>;
}
