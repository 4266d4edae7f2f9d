//! Configuration for the console harness.
//!
//! The harness reads an optional YAML file pointed to by the
//! `LIFETRACKER_CONFIG` environment variable. Every field has a default,
//! and an unset variable or missing file simply yields the defaults; only
//! a present but malformed file is an error.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Console harness configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConsoleConfig {
    /// Whether transient notification lines are surfaced to the user.
    ///
    /// The store always emits; this switch is a presentation-side filter.
    /// Gated-off notifications are still received, just not shown.
    #[serde(default = "default_show_notifications")]
    pub show_notifications: bool,

    /// Delay between scripted transitions, in milliseconds.
    #[serde(default = "default_step_millis")]
    pub step_millis: u64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            show_notifications: default_show_notifications(),
            step_millis: default_step_millis(),
        }
    }
}

impl ConsoleConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_yml::from_str(&contents)?)
    }

    /// Load from the path in `LIFETRACKER_CONFIG`, falling back to the
    /// defaults when the variable is unset or the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if a present file is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var("LIFETRACKER_CONFIG") {
            Ok(raw) => {
                let path = Path::new(&raw);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
            Err(_) => Ok(Self::default()),
        }
    }
}

const fn default_show_notifications() -> bool {
    true
}

const fn default_step_millis() -> u64 {
    400
}
