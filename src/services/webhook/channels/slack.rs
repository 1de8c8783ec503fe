//! Slack Incoming Webhook Channel
//!
//! Sends notifications to a Slack incoming webhook as a form-encoded
//! `payload` field.

use reqwest::blocking::Client;

use super::WebhookChannel;
use crate::models::settings::NotifyConfig;
use crate::services::webhook::http_client::build_http_client;
use crate::services::webhook::types::SlackPayload;
use crate::utils::error::{NotifyError, NotifyResult};

/// Slack Incoming Webhook integration.
///
/// Webhook URL format: `https://hooks.slack.com/services/T.../B.../xxx`
#[derive(Debug)]
pub struct SlackChannel {
    client: Client,
    webhook_url: String,
}

impl SlackChannel {
    /// Channel posting to an explicit webhook URL.
    pub fn new(webhook_url: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            webhook_url: webhook_url.into(),
        }
    }

    /// Channel for the endpoint and proxy named in `config`.
    pub fn from_config(config: &NotifyConfig) -> NotifyResult<Self> {
        if config.token.trim().is_empty() {
            return Err(NotifyError::config(
                "webhook token is not set (config `token` or PLAYBOOK_NOTIFY_TOKEN)",
            ));
        }
        let client = build_http_client(config.proxy.as_ref())?;
        Ok(Self::new(config.webhook_url(), client))
    }

    pub fn webhook_url(&self) -> &str {
        &self.webhook_url
    }
}

impl WebhookChannel for SlackChannel {
    fn name(&self) -> &str {
        "slack"
    }

    fn send(&self, payload: &SlackPayload) -> NotifyResult<()> {
        let body = self.format_message(payload)?;

        let response = self
            .client
            .post(&self.webhook_url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            return Err(NotifyError::http(format!(
                "Slack returned HTTP {}: {}",
                status, body
            )));
        }

        tracing::debug!("Slack webhook accepted {} byte message", payload.text.len());
        Ok(())
    }

    fn format_message(&self, payload: &SlackPayload) -> NotifyResult<String> {
        payload.to_form_body()
    }
}
