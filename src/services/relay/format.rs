//! Message Rendering
//!
//! Pure functions producing the Slack mrkdwn text for each notification.
//! `*_x_*` renders as bold italic in Slack.

use chrono::Duration;
use playbook_notify_core::{AggregateStats, HostStats};

/// `"{prefix}Starting ansible run for play *_{playbook}_*"` followed by the
/// optional tag and host clauses and the invoking user.
pub fn start_message(
    prefix: &str,
    playbook: &str,
    only_tags: &[String],
    subset: Option<&[String]>,
    user: &str,
) -> String {
    let mut msg = format!("{}Starting ansible run for play *_{}_*", prefix, playbook);
    if !only_tags.iter().all(|t| t == "all") {
        msg.push_str(&format!(" with tags *_{}_*", only_tags.join(",")));
    }
    if let Some(hosts) = subset.filter(|h| !h.is_empty()) {
        msg.push_str(&format!(" on hosts *_{}_*", hosts.join(",")));
    }
    msg.push_str(&format!(" by *_{}_*", user));
    msg
}

/// One recap line: `"{prefix}_{host}_ - "` plus `"[*name* - n] "` for every
/// non-zero counter.
pub fn host_summary_line(prefix: &str, host: &str, stats: &HostStats) -> String {
    let mut line = format!("{}_{}_ - ", prefix, host);
    for (name, count) in stats.counters() {
        if count != 0 {
            line.push_str(&format!("[*{}* - {}] ", name, count));
        }
    }
    line
}

/// Recap lines for every host, sorted by host name, joined by newlines.
pub fn stats_summary(prefix: &str, stats: &AggregateStats) -> String {
    stats
        .hosts()
        .map(|(host, host_stats)| host_summary_line(prefix, host, host_stats))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `"MM minutes, SS seconds"`, truncating fractional seconds. Negative
/// durations render as zero.
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.num_seconds().max(0);
    format!("{:02} minutes, {:02} seconds", total / 60, total % 60)
}

pub fn finished_message(prefix: &str, playbook: &str, elapsed: Duration) -> String {
    format!(
        "{}Finished Ansible run for *_{}_* in {}",
        prefix,
        playbook,
        format_elapsed(elapsed)
    )
}

pub fn failure_message(prefix: &str, error: &str) -> String {
    format!(
        "{}The ansible run returned the following error:\n\n {}",
        prefix, error
    )
}
