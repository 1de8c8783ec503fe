//! Notification Relay
//!
//! Holds the state of one playbook run and turns lifecycle events into Slack
//! messages.

use chrono::{DateTime, Utc};
use playbook_notify_core::{AggregateStats, PlayStart, PlaybookCallback, TaskResult};

use super::environment::{Clock, EnvUserResolver, SystemClock, UserResolver};
use super::format;
use crate::models::settings::NotifyConfig;
use crate::services::webhook::{SlackChannel, SlackPayload, WebhookChannel};
use crate::utils::error::{NotifyError, NotifyResult};

/// Run variable that switches notifications on for a play.
pub const ENABLE_VAR: &str = "notify_slack";

/// Posts run start, recap and completion messages to a webhook channel.
///
/// Notifications stay off until a play starts with `notify_slack` set to a
/// truthy value. The decision is made once per play start and every other
/// hook is a no-op while it is off.
pub struct NotificationRelay {
    config: NotifyConfig,
    channel: Box<dyn WebhookChannel>,
    clock: Box<dyn Clock>,
    user: Box<dyn UserResolver>,
    start_time: DateTime<Utc>,
    playbook_name: Option<String>,
    notify_enabled: bool,
    message_prefix: String,
}

impl NotificationRelay {
    pub fn new(config: NotifyConfig, channel: Box<dyn WebhookChannel>) -> Self {
        let clock: Box<dyn Clock> = Box::new(SystemClock);
        let start_time = clock.now();
        let message_prefix = config.message_prefix.clone();
        Self {
            config,
            channel,
            clock,
            user: Box::new(EnvUserResolver),
            start_time,
            playbook_name: None,
            notify_enabled: false,
            message_prefix,
        }
    }

    /// Relay delivering to the Slack webhook described by `config`.
    pub fn from_config(config: NotifyConfig) -> NotifyResult<Self> {
        config.validate().map_err(NotifyError::validation)?;
        let channel = SlackChannel::from_config(&config)?;
        Ok(Self::new(config, Box::new(channel)))
    }

    /// Replace the time source. The run timer restarts from the new clock.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.start_time = clock.now();
        self.clock = Box::new(clock);
        self
    }

    pub fn with_user_resolver(mut self, user: impl UserResolver + 'static) -> Self {
        self.user = Box::new(user);
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.notify_enabled
    }

    pub fn playbook_name(&self) -> Option<&str> {
        self.playbook_name.as_deref()
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn message_prefix(&self) -> &str {
        &self.message_prefix
    }

    fn send_message(&self, text: &str) -> NotifyResult<()> {
        let payload = SlackPayload::from_config(text, &self.config);
        tracing::debug!(
            "Sending {} byte message via {}",
            text.len(),
            self.channel.name()
        );
        self.channel.send(&payload)
    }
}

impl PlaybookCallback for NotificationRelay {
    type Error = NotifyError;

    fn on_play_start(&mut self, play: &PlayStart) -> NotifyResult<()> {
        self.playbook_name = Some(play.playbook_name());
        self.notify_enabled = play.flag(ENABLE_VAR);
        if !self.notify_enabled {
            tracing::debug!(
                "Notifications disabled for playbook {}",
                play.playbook_path.display()
            );
            return Ok(());
        }

        self.start_time = self.clock.now();
        let user = self.user.current_user()?;
        let msg = format::start_message(
            &self.message_prefix,
            self.playbook_name.as_deref().unwrap_or_default(),
            &play.only_tags,
            play.subset.as_deref(),
            &user,
        );
        tracing::info!(
            "Notifications enabled for playbook {}",
            play.playbook_path.display()
        );
        self.send_message(&msg)
    }

    fn on_host_failed(
        &mut self,
        host: &str,
        res: &TaskResult,
        ignore_errors: bool,
    ) -> NotifyResult<()> {
        if !self.notify_enabled || !self.config.notify_on_failure {
            return Ok(());
        }
        if ignore_errors {
            tracing::debug!("Ignoring failure on {} (ignore_errors)", host);
            return Ok(());
        }
        let Some(error) = res.msg() else {
            return Ok(());
        };
        tracing::warn!("Task failed on {}: {}", host, error);
        self.send_message(&format::failure_message(&self.message_prefix, &error))
    }

    fn on_stats(&mut self, stats: &AggregateStats) -> NotifyResult<()> {
        if !self.notify_enabled {
            return Ok(());
        }

        let now = self.clock.now();
        let delta = now - self.start_time;
        self.start_time = now;

        self.send_message(&format::stats_summary(&self.message_prefix, stats))?;

        let msg = format::finished_message(
            &self.message_prefix,
            self.playbook_name.as_deref().unwrap_or_default(),
            delta,
        );
        self.send_message(&msg)
    }
}

impl std::fmt::Debug for NotificationRelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationRelay")
            .field("channel", &self.channel.name())
            .field("playbook_name", &self.playbook_name)
            .field("notify_enabled", &self.notify_enabled)
            .field("start_time", &self.start_time)
            .finish()
    }
}
