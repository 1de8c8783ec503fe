//! Event Stream Bridge
//!
//! Feeds newline-delimited `CallbackEvent` JSON into a callback, so a host
//! runtime living in another process can drive the relay over a pipe.

use std::io::BufRead;

use playbook_notify_core::{CallbackEvent, PlaybookCallback};

use crate::utils::error::{NotifyError, NotifyResult};

/// Counts of what happened to the lines of one stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BridgeSummary {
    pub dispatched: usize,
    pub skipped: usize,
}

/// Read events from `reader` until EOF and dispatch each to `callback`.
///
/// Blank lines are ignored and malformed lines are logged and skipped. The
/// first callback error stops the stream and is returned.
pub fn run_event_stream<R, C>(reader: R, callback: &mut C) -> NotifyResult<BridgeSummary>
where
    R: BufRead,
    C: PlaybookCallback<Error = NotifyError> + ?Sized,
{
    let mut summary = BridgeSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let event = match CallbackEvent::from_json_line(&line) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!("Skipping malformed event on line {}: {}", index + 1, e);
                summary.skipped += 1;
                continue;
            }
        };

        tracing::debug!("Dispatching {} event", event.name());
        event.dispatch(&mut *callback)?;
        summary.dispatched += 1;
    }

    Ok(summary)
}
