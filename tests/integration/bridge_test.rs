//! Bridge Integration Tests
//!
//! A JSON-lines event stream driving a real relay.

use std::io::Cursor;

use chrono::Duration;
use playbook_notify::{run_event_stream, NotifyError};

use crate::support::{harness, Harness};

#[test]
fn test_stream_drives_full_run() {
    let mut h = harness();
    let start = concat!(
        r#"{"event":"playbook_start"}"#,
        "\n",
        r#"{"event":"play_start","playbook_path":"deploy.yml","run_vars":{"notify_slack":true},"subset":["web1"]}"#,
        "\n",
        r#"{"event":"task_start","name":"Restart app","is_conditional":false}"#,
        "\n",
        r#"{"event":"host_ok","host":"web1","res":{"changed":true}}"#,
        "\n",
    );
    let summary = run_event_stream(Cursor::new(start), &mut h.relay).unwrap();
    assert_eq!(summary.dispatched, 4);

    h.clock.advance(Duration::seconds(61));
    let end = concat!(
        r#"{"event":"stats","hosts":{"web1":{"ok":4,"changed":1}}}"#,
        "\n"
    );
    run_event_stream(Cursor::new(end), &mut h.relay).unwrap();

    assert_eq!(
        h.channel.texts(),
        vec![
            "Starting ansible run for play *_deploy_* on hosts *_web1_* by *_deployer_*",
            "_web1_ - [*ok* - 4] [*changed* - 1] ",
            "Finished Ansible run for *_deploy_* in 01 minutes, 01 seconds",
        ]
    );
}

#[test]
fn test_stream_skips_garbage_lines() {
    let mut h = harness();
    let input = "{\"event\":\"mystery\"}\n{oops\n{\"event\":\"no_hosts\"}\n";

    let summary = run_event_stream(Cursor::new(input), &mut h.relay).unwrap();

    assert_eq!(summary.dispatched, 1);
    assert_eq!(summary.skipped, 2);
    assert!(h.channel.texts().is_empty());
}

#[test]
fn test_stream_reports_failures_when_enabled() {
    let mut h = harness();
    let input = concat!(
        r#"{"event":"play_start","playbook_path":"site.yml","run_vars":{"notify_slack":"yes"}}"#,
        "\n",
        r#"{"event":"host_failed","host":"db1","res":{"msg":"Permission denied"}}"#,
        "\n",
    );

    run_event_stream(Cursor::new(input), &mut h.relay).unwrap();

    assert_eq!(
        h.channel.texts().last().unwrap(),
        "The ansible run returned the following error:\n\n Permission denied"
    );
}

#[test]
fn test_stream_surfaces_relay_errors() {
    let Harness { relay, channel, .. } = harness();
    let mut relay = relay.with_user_resolver(MissingUser);
    let input = r#"{"event":"play_start","playbook_path":"site.yml","run_vars":{"notify_slack":true}}"#;

    let err = run_event_stream(Cursor::new(input), &mut relay).unwrap_err();

    assert!(matches!(err, NotifyError::Identity(_)));
    assert!(channel.texts().is_empty());
}

struct MissingUser;

impl playbook_notify::UserResolver for MissingUser {
    fn current_user(&self) -> playbook_notify::NotifyResult<String> {
        Err(NotifyError::identity("USER is not set"))
    }
}
