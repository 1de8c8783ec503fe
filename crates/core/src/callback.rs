//! Playbook Callback Contract
//!
//! The lifecycle interface a host runtime drives during a playbook run, and
//! a serializable event enum so hosts outside the process can feed it.
//!
//! Every hook has an inert default body. Implementors override only the
//! points they react to.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::events::{AggregateStats, PlayStart, TaskResult, VarsPrompt};

/// Lifecycle hooks invoked by the host runtime, one at a time and in event
/// order, from a single thread.
pub trait PlaybookCallback {
    type Error;

    fn on_playbook_start(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn on_play_start(&mut self, _play: &PlayStart) -> Result<(), Self::Error> {
        Ok(())
    }

    fn on_task_start(&mut self, _name: &str, _is_conditional: bool) -> Result<(), Self::Error> {
        Ok(())
    }

    fn on_setup(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn on_host_ok(&mut self, _host: &str, _res: &TaskResult) -> Result<(), Self::Error> {
        Ok(())
    }

    fn on_host_failed(
        &mut self,
        _host: &str,
        _res: &TaskResult,
        _ignore_errors: bool,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn on_host_error(&mut self, _host: &str, _msg: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn on_host_skipped(&mut self, _host: &str, _item: Option<&Value>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn on_host_unreachable(&mut self, _host: &str, _res: &TaskResult) -> Result<(), Self::Error> {
        Ok(())
    }

    fn on_no_hosts(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn on_async_poll(
        &mut self,
        _host: &str,
        _res: &TaskResult,
        _jid: &str,
        _clock: u64,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn on_async_ok(&mut self, _host: &str, _res: &TaskResult, _jid: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn on_async_failed(
        &mut self,
        _host: &str,
        _res: &TaskResult,
        _jid: &str,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn on_notify(&mut self, _host: &str, _handler: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn on_no_hosts_matched(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn on_no_hosts_remaining(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn on_vars_prompt(&mut self, _prompt: &VarsPrompt) -> Result<(), Self::Error> {
        Ok(())
    }

    fn on_import_for_host(&mut self, _host: &str, _imported_file: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn on_not_import_for_host(
        &mut self,
        _host: &str,
        _missing_file: &str,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn on_stats(&mut self, _stats: &AggregateStats) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// One lifecycle event in wire form: `{"event": "<name>", ...fields}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CallbackEvent {
    PlaybookStart,
    PlayStart(PlayStart),
    TaskStart {
        name: String,
        #[serde(default)]
        is_conditional: bool,
    },
    Setup,
    HostOk {
        host: String,
        #[serde(default)]
        res: TaskResult,
    },
    HostFailed {
        host: String,
        #[serde(default)]
        res: TaskResult,
        #[serde(default)]
        ignore_errors: bool,
    },
    HostError {
        host: String,
        msg: String,
    },
    HostSkipped {
        host: String,
        #[serde(default)]
        item: Option<Value>,
    },
    HostUnreachable {
        host: String,
        #[serde(default)]
        res: TaskResult,
    },
    NoHosts,
    AsyncPoll {
        host: String,
        #[serde(default)]
        res: TaskResult,
        jid: String,
        #[serde(default)]
        clock: u64,
    },
    AsyncOk {
        host: String,
        #[serde(default)]
        res: TaskResult,
        jid: String,
    },
    AsyncFailed {
        host: String,
        #[serde(default)]
        res: TaskResult,
        jid: String,
    },
    Notify {
        host: String,
        handler: String,
    },
    NoHostsMatched,
    NoHostsRemaining,
    VarsPrompt(VarsPrompt),
    ImportForHost {
        host: String,
        imported_file: String,
    },
    NotImportForHost {
        host: String,
        missing_file: String,
    },
    Stats {
        hosts: AggregateStats,
    },
}

impl CallbackEvent {
    /// Parse a single JSON line.
    pub fn from_json_line(line: &str) -> CoreResult<Self> {
        let line = line.trim();
        if line.is_empty() {
            return Err(CoreError::parse("empty event line"));
        }
        Ok(serde_json::from_str(line)?)
    }

    /// Wire name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PlaybookStart => "playbook_start",
            Self::PlayStart(_) => "play_start",
            Self::TaskStart { .. } => "task_start",
            Self::Setup => "setup",
            Self::HostOk { .. } => "host_ok",
            Self::HostFailed { .. } => "host_failed",
            Self::HostError { .. } => "host_error",
            Self::HostSkipped { .. } => "host_skipped",
            Self::HostUnreachable { .. } => "host_unreachable",
            Self::NoHosts => "no_hosts",
            Self::AsyncPoll { .. } => "async_poll",
            Self::AsyncOk { .. } => "async_ok",
            Self::AsyncFailed { .. } => "async_failed",
            Self::Notify { .. } => "notify",
            Self::NoHostsMatched => "no_hosts_matched",
            Self::NoHostsRemaining => "no_hosts_remaining",
            Self::VarsPrompt(_) => "vars_prompt",
            Self::ImportForHost { .. } => "import_for_host",
            Self::NotImportForHost { .. } => "not_import_for_host",
            Self::Stats { .. } => "stats",
        }
    }

    /// Invoke the matching hook on `callback`.
    pub fn dispatch<C>(&self, callback: &mut C) -> Result<(), C::Error>
    where
        C: PlaybookCallback + ?Sized,
    {
        match self {
            Self::PlaybookStart => callback.on_playbook_start(),
            Self::PlayStart(play) => callback.on_play_start(play),
            Self::TaskStart {
                name,
                is_conditional,
            } => callback.on_task_start(name, *is_conditional),
            Self::Setup => callback.on_setup(),
            Self::HostOk { host, res } => callback.on_host_ok(host, res),
            Self::HostFailed {
                host,
                res,
                ignore_errors,
            } => callback.on_host_failed(host, res, *ignore_errors),
            Self::HostError { host, msg } => callback.on_host_error(host, msg),
            Self::HostSkipped { host, item } => callback.on_host_skipped(host, item.as_ref()),
            Self::HostUnreachable { host, res } => callback.on_host_unreachable(host, res),
            Self::NoHosts => callback.on_no_hosts(),
            Self::AsyncPoll {
                host,
                res,
                jid,
                clock,
            } => callback.on_async_poll(host, res, jid, *clock),
            Self::AsyncOk { host, res, jid } => callback.on_async_ok(host, res, jid),
            Self::AsyncFailed { host, res, jid } => callback.on_async_failed(host, res, jid),
            Self::Notify { host, handler } => callback.on_notify(host, handler),
            Self::NoHostsMatched => callback.on_no_hosts_matched(),
            Self::NoHostsRemaining => callback.on_no_hosts_remaining(),
            Self::VarsPrompt(prompt) => callback.on_vars_prompt(prompt),
            Self::ImportForHost {
                host,
                imported_file,
            } => callback.on_import_for_host(host, imported_file),
            Self::NotImportForHost { host, missing_file } => {
                callback.on_not_import_for_host(host, missing_file)
            }
            Self::Stats { hosts } => callback.on_stats(hosts),
        }
    }
}
