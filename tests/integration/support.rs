//! Shared fixtures for the integration suite.

use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};
use playbook_notify::{
    ManualClock, NotificationRelay, NotifyConfig, NotifyResult, SlackPayload, StaticUser,
    WebhookChannel,
};

/// Channel that records payloads instead of posting them.
#[derive(Clone, Default)]
pub struct RecordingChannel {
    sent: Arc<Mutex<Vec<SlackPayload>>>,
}

impl RecordingChannel {
    pub fn payloads(&self) -> Vec<SlackPayload> {
        self.sent.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.payloads().into_iter().map(|p| p.text).collect()
    }
}

impl WebhookChannel for RecordingChannel {
    fn name(&self) -> &str {
        "recording"
    }

    fn send(&self, payload: &SlackPayload) -> NotifyResult<()> {
        self.sent.lock().unwrap().push(payload.clone());
        Ok(())
    }

    fn format_message(&self, payload: &SlackPayload) -> NotifyResult<String> {
        payload.to_form_body()
    }
}

pub struct Harness {
    pub relay: NotificationRelay,
    pub channel: RecordingChannel,
    pub clock: ManualClock,
}

pub fn harness() -> Harness {
    harness_with(NotifyConfig::default())
}

pub fn harness_with(config: NotifyConfig) -> Harness {
    let channel = RecordingChannel::default();
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 3, 9, 8, 30, 0).unwrap());
    let relay = NotificationRelay::new(config, Box::new(channel.clone()))
        .with_clock(clock.clone())
        .with_user_resolver(StaticUser("deployer".to_string()));
    Harness {
        relay,
        channel,
        clock,
    }
}
