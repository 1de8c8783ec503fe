//! JSON Configuration Management
//!
//! Handles reading the notifier configuration file and applying environment
//! overrides on top of it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::models::settings::NotifyConfig;
use crate::utils::error::{NotifyError, NotifyResult};
use crate::utils::paths::config_path;

/// Environment variable overriding the configured webhook token
pub const TOKEN_ENV_VAR: &str = "PLAYBOOK_NOTIFY_TOKEN";

/// Configuration service for the notifier
#[derive(Debug)]
pub struct ConfigService {
    config_path: PathBuf,
    config: NotifyConfig,
}

impl ConfigService {
    /// Load from the default location. A missing file yields defaults.
    pub fn load_default() -> NotifyResult<Self> {
        Self::load(config_path()?)
    }

    /// Load from `path`, falling back to defaults when the file does not
    /// exist, then apply environment overrides.
    pub fn load(path: impl Into<PathBuf>) -> NotifyResult<Self> {
        let config_path = path.into();
        let mut config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            tracing::debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            NotifyConfig::default()
        };

        apply_env_overrides(&mut config, |key| std::env::var(key).ok());
        config.validate().map_err(NotifyError::validation)?;

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Read configuration from a file. Validation is left to the caller.
    fn load_from_file(path: &Path) -> NotifyResult<NotifyConfig> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Path the configuration was loaded from
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Get the current configuration
    pub fn get_config(&self) -> &NotifyConfig {
        &self.config
    }

    /// Take ownership of the configuration
    pub fn into_config(self) -> NotifyConfig {
        self.config
    }
}

/// Apply environment overrides using `lookup` to read variables.
pub fn apply_env_overrides(config: &mut NotifyConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(token) = lookup(TOKEN_ENV_VAR).filter(|t| !t.trim().is_empty()) {
        config.token = token.trim().to_string();
    }
}
