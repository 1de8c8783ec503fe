//! Cross-Platform Path Utilities
//!
//! Resolves where the notifier looks for its configuration file.

use std::path::PathBuf;

use crate::utils::error::{NotifyError, NotifyResult};

/// Directory name under the platform config directory
const APP_DIR_NAME: &str = "playbook-notify";

/// Get the platform configuration directory (e.g. `~/.config` on Linux)
pub fn config_dir() -> NotifyResult<PathBuf> {
    dirs::config_dir()
        .ok_or_else(|| NotifyError::config("Could not determine configuration directory"))
}

/// Get the notifier directory (`<config_dir>/playbook-notify/`)
pub fn notify_dir() -> NotifyResult<PathBuf> {
    Ok(config_dir()?.join(APP_DIR_NAME))
}

/// Get the default config file path (`<config_dir>/playbook-notify/config.json`)
pub fn config_path() -> NotifyResult<PathBuf> {
    Ok(notify_dir()?.join("config.json"))
}
