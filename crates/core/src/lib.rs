//! Playbook Notify Core
//!
//! The contract between a playbook runner and anything observing it: the
//! lifecycle callback trait, the records passed to each hook, and the error
//! type for decoding events. No HTTP, filesystem or configuration code lives
//! here.
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `events` - Event records (`PlayStart`, `HostStats`, `AggregateStats`, `TaskResult`, `VarsPrompt`)
//! - `callback` - Lifecycle trait (`PlaybookCallback`) and wire enum (`CallbackEvent`)

pub mod callback;
pub mod error;
pub mod events;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Event Records ──────────────────────────────────────────────────────
pub use events::{is_truthy, playbook_name, AggregateStats, HostStats, PlayStart, TaskResult, VarsPrompt};

// ── Callback Contract ──────────────────────────────────────────────────
pub use callback::{CallbackEvent, PlaybookCallback};
