//! Run Environment
//!
//! The two things the relay reads from the outside world besides its
//! configuration: the current time and the identity of the invoking user.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};

use crate::utils::error::{NotifyError, NotifyResult};

/// Source of the current time.
pub trait Clock: Send {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += by;
    }

    pub fn set(&self, to: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = to;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Resolves the name shown as the initiator of a run.
pub trait UserResolver: Send {
    fn current_user(&self) -> NotifyResult<String>;
}

/// Reads the login name from the environment (`USER`, or `USERNAME` on
/// Windows). A missing or empty variable is an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvUserResolver;

impl EnvUserResolver {
    #[cfg(windows)]
    const VAR: &'static str = "USERNAME";
    #[cfg(not(windows))]
    const VAR: &'static str = "USER";

    fn resolve(lookup: impl Fn(&str) -> Option<String>) -> NotifyResult<String> {
        lookup(Self::VAR)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                NotifyError::identity(format!(
                    "cannot determine current user: {} is not set",
                    Self::VAR
                ))
            })
    }
}

impl UserResolver for EnvUserResolver {
    fn current_user(&self) -> NotifyResult<String> {
        Self::resolve(|key| std::env::var(key).ok())
    }
}

/// Always reports the same user.
#[derive(Debug, Clone)]
pub struct StaticUser(pub String);

impl UserResolver for StaticUser {
    fn current_user(&self) -> NotifyResult<String> {
        Ok(self.0.clone())
    }
}
