//! Webhook Delivery
//!
//! Payload construction and blocking delivery to a Slack incoming webhook.

pub mod channels;
pub mod http_client;
pub mod types;

pub use channels::slack::SlackChannel;
pub use channels::WebhookChannel;
pub use http_client::build_http_client;
pub use types::*;
