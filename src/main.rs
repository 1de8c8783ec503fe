// Playbook Notify - stdin bridge entry point
//
// Reads lifecycle events as JSON lines on stdin and relays them to Slack.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use playbook_notify::{run_event_stream, ConfigService, NotificationRelay, NotifyResult};
use tracing_subscriber::EnvFilter;

/// Relay playbook lifecycle events from stdin to a Slack incoming webhook
#[derive(Parser, Debug)]
#[command(name = "playbook-notify", version)]
struct Args {
    /// Config file (defaults to <config_dir>/playbook-notify/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    match run(args.config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config_path: Option<PathBuf>) -> NotifyResult<()> {
    let service = match config_path {
        Some(path) => ConfigService::load(path)?,
        None => ConfigService::load_default()?,
    };
    tracing::debug!("Loaded config from {}", service.config_path().display());

    let mut relay = NotificationRelay::from_config(service.into_config())?;
    let stdin = io::stdin();
    let summary = run_event_stream(stdin.lock(), &mut relay)?;
    tracing::info!(
        "Event stream closed: {} dispatched, {} skipped",
        summary.dispatched,
        summary.skipped
    );
    Ok(())
}
