//! Relay Integration Tests
//!
//! End-to-end behaviour of the relay across a whole run: opt-in gating,
//! exact start/recap/finish text, and timer resets between recaps.

use chrono::Duration;
use playbook_notify::{AggregateStats, HostStats, PlayStart, PlaybookCallback, TaskResult};
use serde_json::json;

use crate::support::{harness, harness_with};

fn stats(entries: &[(&str, HostStats)]) -> AggregateStats {
    entries.iter().map(|(h, s)| (h.to_string(), *s)).collect()
}

// ============================================================================
// Opt-in gating
// ============================================================================

#[test]
fn test_missing_flag_sends_nothing_for_whole_run() {
    let mut h = harness();

    h.relay.on_playbook_start().unwrap();
    h.relay.on_play_start(&PlayStart::new("site.yml")).unwrap();
    h.relay.on_task_start("Gather facts", false).unwrap();
    h.relay
        .on_host_failed("web1", &TaskResult(json!({"msg": "boom"})), false)
        .unwrap();
    h.relay
        .on_stats(&stats(&[("web1", HostStats::new(1, 0, 0, 1))]))
        .unwrap();

    assert!(h.channel.texts().is_empty());
}

#[test]
fn test_false_flag_sends_nothing() {
    let mut h = harness();
    let play = PlayStart::new("site.yml").with_var("notify_slack", false);

    h.relay.on_play_start(&play).unwrap();
    h.relay
        .on_stats(&stats(&[("web1", HostStats::new(1, 0, 0, 0))]))
        .unwrap();

    assert!(h.channel.texts().is_empty());
}

#[test]
fn test_string_flag_from_extra_vars_enables() {
    let mut h = harness();
    let play = PlayStart::new("site.yml").with_var("notify_slack", "true");

    h.relay.on_play_start(&play).unwrap();

    assert!(h.relay.is_enabled());
    assert_eq!(h.channel.texts().len(), 1);
}

// ============================================================================
// Message text
// ============================================================================

#[test]
fn test_start_message_with_tags_and_subset() {
    let mut h = harness();
    let play = PlayStart::new("/srv/ansible/site.yml")
        .with_var("notify_slack", true)
        .with_tags(["deploy"])
        .with_subset(["web1", "web2"]);

    h.relay.on_play_start(&play).unwrap();

    assert_eq!(
        h.channel.texts(),
        vec![
            "Starting ansible run for play *_site_* with tags *_deploy_* on hosts *_web1,web2_* by *_deployer_*"
        ]
    );
}

#[test]
fn test_start_message_omits_all_tag_filter() {
    let mut h = harness();
    let play = PlayStart::new("site.yml")
        .with_var("notify_slack", true)
        .with_tags(["all"]);

    h.relay.on_play_start(&play).unwrap();

    assert_eq!(
        h.channel.texts(),
        vec!["Starting ansible run for play *_site_* by *_deployer_*"]
    );
}

#[test]
fn test_recap_is_sorted_and_skips_zero_counters() {
    let mut h = harness();
    h.relay
        .on_play_start(&PlayStart::new("site.yml").with_var("notify_slack", true))
        .unwrap();

    h.relay
        .on_stats(&stats(&[
            ("web2", HostStats::default()),
            ("db1", HostStats::new(0, 0, 1, 0)),
            ("web1", HostStats::new(3, 1, 0, 0)),
        ]))
        .unwrap();

    let texts = h.channel.texts();
    assert_eq!(
        texts[1],
        "_db1_ - [*unreachable* - 1] \n_web1_ - [*ok* - 3] [*changed* - 1] \n_web2_ - "
    );
}

#[test]
fn test_finish_message_reports_elapsed_time() {
    let mut h = harness();
    h.relay
        .on_play_start(&PlayStart::new("site.yml").with_var("notify_slack", true))
        .unwrap();
    h.clock.advance(Duration::milliseconds(125_900));

    h.relay
        .on_stats(&stats(&[("web1", HostStats::new(1, 0, 0, 0))]))
        .unwrap();

    assert_eq!(
        h.channel.texts().last().unwrap(),
        "Finished Ansible run for *_site_* in 02 minutes, 05 seconds"
    );
}

#[test]
fn test_each_recap_resets_the_timer() {
    let mut h = harness();
    h.relay
        .on_play_start(&PlayStart::new("site.yml").with_var("notify_slack", true))
        .unwrap();
    let recap = stats(&[("web1", HostStats::new(1, 0, 0, 0))]);

    h.clock.advance(Duration::seconds(10));
    h.relay.on_stats(&recap).unwrap();
    h.clock.advance(Duration::seconds(60));
    h.relay.on_stats(&recap).unwrap();
    h.clock.advance(Duration::seconds(5));
    h.relay.on_stats(&recap).unwrap();

    let finishes: Vec<String> = h
        .channel
        .texts()
        .into_iter()
        .filter(|t| t.starts_with("Finished"))
        .collect();
    assert_eq!(
        finishes,
        vec![
            "Finished Ansible run for *_site_* in 00 minutes, 10 seconds",
            "Finished Ansible run for *_site_* in 01 minutes, 00 seconds",
            "Finished Ansible run for *_site_* in 00 minutes, 05 seconds",
        ]
    );
}

// ============================================================================
// Payload defaults and prefix
// ============================================================================

#[test]
fn test_prefix_and_emoji_flow_into_payloads() {
    let config = playbook_notify::NotifyConfig {
        message_prefix: "[staging] ".to_string(),
        icon_emoji: Some(":rocket:".to_string()),
        ..Default::default()
    };
    let mut h = harness_with(config);
    h.relay
        .on_play_start(&PlayStart::new("site.yml").with_var("notify_slack", true))
        .unwrap();
    h.relay
        .on_stats(&stats(&[("web1", HostStats::new(2, 0, 0, 0))]))
        .unwrap();

    let payloads = h.channel.payloads();
    assert_eq!(payloads.len(), 3);
    for payload in &payloads {
        assert!(payload.text.starts_with("[staging] "), "{}", payload.text);
        assert_eq!(payload.icon_emoji.as_deref(), Some(":rocket:"));
        assert!(payload.icon_url.is_none());
    }
    assert_eq!(payloads[1].text, "[staging] _web1_ - [*ok* - 2] ");
}
