//! Configuration management for the contact assistant.
//!
//! Settings come from environment variables, optionally seeded from a
//! `.env` file. Every setting has a default, so an empty environment is valid.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Log levels accepted by `LOG_LEVEL`.
const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,

    /// Prompt printed before each command (default: "Enter a command: ")
    pub prompt: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `ASSISTANT_PROMPT`: Input prompt (default: "Enter a command: ")
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let log_level = env::var("LOG_LEVEL")
            .map(|level| level.trim().to_lowercase())
            .unwrap_or(defaults.log_level);
        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), log_level),
            });
        }

        let prompt = env::var("ASSISTANT_PROMPT").unwrap_or(defaults.prompt);
        if prompt.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ASSISTANT_PROMPT".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config { log_level, prompt })
    }

    /// Load configuration, falling back to defaults if any value is invalid.
    ///
    /// The rejected value's error is returned alongside so the caller can
    /// log it once logging is set up.
    pub fn load() -> (Self, Option<ConfigError>) {
        match Self::from_env() {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "error".to_string(),
            prompt: "Enter a command: ".to_string(),
        }
    }
}
