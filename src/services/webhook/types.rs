//! Webhook Payload Types
//!
//! The message envelope accepted by Slack incoming webhooks and its
//! form-encoded wire representation.

use serde::{Deserialize, Serialize};

use crate::models::settings::{NotifyConfig, DEFAULT_ICON_URL, DEFAULT_USERNAME};
use crate::utils::error::NotifyResult;

/// Incoming-webhook message envelope.
///
/// Exactly one of `icon_url` / `icon_emoji` is set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlackPayload {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_names: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse: Option<String>,
}

impl SlackPayload {
    /// Payload with the stock username and icon.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            channel: None,
            username: Some(DEFAULT_USERNAME.to_string()),
            icon_url: Some(DEFAULT_ICON_URL.to_string()),
            icon_emoji: None,
            link_names: None,
            parse: None,
        }
    }

    /// Payload carrying the defaults from `config`.
    pub fn from_config(text: impl Into<String>, config: &NotifyConfig) -> Self {
        let mut payload = Self::new(text)
            .with_username(config.username.clone())
            .with_icon_url(config.icon_url.clone());
        if let Some(channel) = &config.channel {
            payload = payload.with_channel(channel);
        }
        if let Some(emoji) = &config.icon_emoji {
            payload = payload.with_icon_emoji(emoji);
        }
        if let Some(link_names) = config.link_names {
            payload = payload.with_link_names(link_names);
        }
        if let Some(parse) = &config.parse {
            payload = payload.with_parse(parse);
        }
        payload
    }

    /// Target channel; a leading `#` is added when missing.
    pub fn with_channel(mut self, channel: &str) -> Self {
        self.channel = Some(normalize_channel(channel));
        self
    }

    pub fn with_username(mut self, username: Option<String>) -> Self {
        self.username = username;
        self
    }

    /// Ignored while an emoji icon is set.
    pub fn with_icon_url(mut self, icon_url: impl Into<String>) -> Self {
        if self.icon_emoji.is_none() {
            self.icon_url = Some(icon_url.into());
        }
        self
    }

    pub fn with_icon_emoji(mut self, icon_emoji: impl Into<String>) -> Self {
        self.icon_emoji = Some(icon_emoji.into());
        self.icon_url = None;
        self
    }

    pub fn with_link_names(mut self, link_names: bool) -> Self {
        self.link_names = Some(link_names);
        self
    }

    pub fn with_parse(mut self, parse: &str) -> Self {
        self.parse = Some(parse.to_string());
        self
    }

    /// `application/x-www-form-urlencoded` body with the single field
    /// `payload=<json>`.
    pub fn to_form_body(&self) -> NotifyResult<String> {
        let json = serde_json::to_string(self)?;
        Ok(url::form_urlencoded::Serializer::new(String::new())
            .append_pair("payload", &json)
            .finish())
    }
}

fn normalize_channel(channel: &str) -> String {
    if channel.starts_with('#') {
        channel.to_string()
    } else {
        format!("#{}", channel)
    }
}
