//! Lifecycle Event Records
//!
//! Typed records for the data the host runtime hands to callbacks: the play
//! being started, per-host task results and the aggregate run statistics.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Everything known about a play at the moment it starts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlayStart {
    /// Path of the playbook file driving this run
    pub playbook_path: PathBuf,
    /// Variables scoped to this run
    #[serde(default)]
    pub run_vars: Map<String, Value>,
    /// Tag filter the run was started with (`--tags`)
    #[serde(default)]
    pub only_tags: Vec<String>,
    /// Inventory subset (`--limit`), if any
    #[serde(default)]
    pub subset: Option<Vec<String>>,
}

impl PlayStart {
    pub fn new(playbook_path: impl Into<PathBuf>) -> Self {
        Self {
            playbook_path: playbook_path.into(),
            ..Default::default()
        }
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.run_vars.insert(key.into(), value.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_subset<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subset = Some(hosts.into_iter().map(Into::into).collect());
        self
    }

    /// Base name of the playbook file with its last extension removed.
    pub fn playbook_name(&self) -> String {
        playbook_name(&self.playbook_path)
    }

    /// Truthiness of a run variable. Missing keys are false.
    pub fn flag(&self, key: &str) -> bool {
        self.run_vars.get(key).map(is_truthy).unwrap_or(false)
    }
}

/// `site.yml` -> `site`, `deploy/app.tar.yml` -> `app.tar`.
pub fn playbook_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Loose boolean interpretation used for run variables passed as extra vars,
/// which often arrive as strings. Arrays and objects are never truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "on" | "y" | "1"
        ),
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        _ => false,
    }
}

/// Recap counters for a single host.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HostStats {
    #[serde(default)]
    pub ok: u64,
    #[serde(default)]
    pub changed: u64,
    #[serde(default)]
    pub unreachable: u64,
    #[serde(default)]
    pub failures: u64,
}

impl HostStats {
    pub fn new(ok: u64, changed: u64, unreachable: u64, failures: u64) -> Self {
        Self {
            ok,
            changed,
            unreachable,
            failures,
        }
    }

    /// Counters in recap order.
    pub fn counters(&self) -> [(&'static str, u64); 4] {
        [
            ("ok", self.ok),
            ("changed", self.changed),
            ("unreachable", self.unreachable),
            ("failures", self.failures),
        ]
    }
}

/// Per-host statistics for a whole run, ordered by host name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct AggregateStats {
    processed: BTreeMap<String, HostStats>,
}

impl AggregateStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the counters for a host.
    pub fn record(&mut self, host: impl Into<String>, stats: HostStats) -> &mut Self {
        self.processed.insert(host.into(), stats);
        self
    }

    pub fn summarize(&self, host: &str) -> Option<&HostStats> {
        self.processed.get(host)
    }

    /// Hosts in ascending lexicographic order with their counters.
    pub fn hosts(&self) -> impl Iterator<Item = (&str, &HostStats)> {
        self.processed.iter().map(|(host, stats)| (host.as_str(), stats))
    }

    pub fn len(&self) -> usize {
        self.processed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processed.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, HostStats)> for AggregateStats {
    fn from_iter<I: IntoIterator<Item = (S, HostStats)>>(iter: I) -> Self {
        Self {
            processed: iter.into_iter().map(|(h, s)| (h.into(), s)).collect(),
        }
    }
}

/// Raw module result for one host, as reported by the runner.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct TaskResult(pub Value);

impl TaskResult {
    /// The result's `msg` field. Non-string messages are rendered as JSON.
    pub fn msg(&self) -> Option<String> {
        match self.0.get("msg")? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl From<Value> for TaskResult {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Arguments of an interactive `vars_prompt` entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VarsPrompt {
    pub varname: String,
    #[serde(default = "default_private")]
    pub private: bool,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub encrypt: Option<String>,
    #[serde(default)]
    pub confirm: bool,
    #[serde(default)]
    pub salt_size: Option<u32>,
    #[serde(default)]
    pub salt: Option<String>,
    #[serde(default)]
    pub default: Option<String>,
}

fn default_private() -> bool {
    true
}
