//! Settings Models
//!
//! Notifier configuration: where the webhook lives, the defaults stamped on
//! every payload, and optional proxy routing.

use serde::{Deserialize, Serialize};

/// Default Slack incoming-webhook base; the token is appended as the last
/// path segment.
pub const DEFAULT_WEBHOOK_BASE_URL: &str = "https://hooks.slack.com/services";

/// Default bot display name
pub const DEFAULT_USERNAME: &str = "Ansible";

/// Default bot avatar, used unless an emoji icon is configured
pub const DEFAULT_ICON_URL: &str = "http://www.ansible.com/favicon.ico";

/// Notifier configuration stored in config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NotifyConfig {
    /// Base URL of the incoming-webhook service
    pub webhook_base_url: String,
    /// Webhook token (`T000/B000/XXXX`)
    pub token: String,
    /// Channel override; `#` is added when missing
    pub channel: Option<String>,
    /// Bot display name
    pub username: Option<String>,
    /// Bot avatar URL
    pub icon_url: String,
    /// Bot avatar emoji; takes precedence over `icon_url`
    pub icon_emoji: Option<String>,
    /// Ask Slack to link @user and #channel names
    pub link_names: Option<bool>,
    /// Slack `parse` mode ("full" or "none")
    pub parse: Option<String>,
    /// Text prepended to every message
    pub message_prefix: String,
    /// Send a message when a task fails on a host
    pub notify_on_failure: bool,
    /// Route webhook traffic through a proxy
    pub proxy: Option<ProxyConfig>,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            webhook_base_url: DEFAULT_WEBHOOK_BASE_URL.to_string(),
            token: String::new(),
            channel: None,
            username: Some(DEFAULT_USERNAME.to_string()),
            icon_url: DEFAULT_ICON_URL.to_string(),
            icon_emoji: None,
            link_names: None,
            parse: None,
            message_prefix: String::new(),
            notify_on_failure: true,
            proxy: None,
        }
    }
}

impl NotifyConfig {
    /// Config pointing at `base_url` with the given token.
    pub fn with_endpoint(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            webhook_base_url: base_url.into(),
            token: token.into(),
            ..Default::default()
        }
    }

    /// Full webhook URL: `{webhook_base_url}/{token}`.
    pub fn webhook_url(&self) -> String {
        format!(
            "{}/{}",
            self.webhook_base_url.trim_end_matches('/'),
            self.token.trim_start_matches('/')
        )
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let base = url::Url::parse(&self.webhook_base_url)
            .map_err(|e| format!("Invalid webhook_base_url '{}': {}", self.webhook_base_url, e))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(format!(
                "webhook_base_url must use http or https, got '{}'",
                base.scheme()
            ));
        }

        if self.token.chars().any(char::is_whitespace) {
            return Err("token must not contain whitespace".to_string());
        }

        if let Some(parse) = &self.parse {
            if !["full", "none"].contains(&parse.as_str()) {
                return Err(format!(
                    "Invalid parse mode: {}. Must be 'full' or 'none'",
                    parse
                ));
            }
        }

        if let Some(proxy) = &self.proxy {
            proxy.validate()?;
        }

        Ok(())
    }
}

/// Proxy used for webhook delivery
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProxyConfig {
    /// `http://`, `https://` or `socks5://` URL without credentials
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Only held in memory; never written back out.
    #[serde(default, skip_serializing)]
    pub password: Option<String>,
}

impl ProxyConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: None,
            password: None,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let parsed = url::Url::parse(&self.url)
            .map_err(|e| format!("Invalid proxy url '{}': {}", self.url, e))?;
        if !matches!(parsed.scheme(), "http" | "https" | "socks5" | "socks5h") {
            return Err(format!("Unsupported proxy scheme: {}", parsed.scheme()));
        }
        Ok(())
    }
}
