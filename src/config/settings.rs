use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;

/// Trailing context window handed to an agent when it forms a response.
pub const DEFAULT_MAX_CONTEXT_MESSAGES: usize = 5;

/// Per-message content limit in the grouped summary body.
pub const DEFAULT_MAX_SUMMARY_CONTENT_LENGTH: usize = 100;

/// Rounds per discussion in a default session.
pub const DEFAULT_DISCUSSION_ROUNDS: usize = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub discussion: DiscussionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscussionConfig {
    /// Rounds per discussion; every roster agent contributes once per round.
    pub rounds: usize,
    /// How many trailing messages an agent sees when forming a response.
    pub max_context_messages: usize,
    /// Maximum content length shown per message in the summary body.
    pub max_summary_content_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for DiscussionConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_DISCUSSION_ROUNDS,
            max_context_messages: DEFAULT_MAX_CONTEXT_MESSAGES,
            max_summary_content_length: DEFAULT_MAX_SUMMARY_CONTENT_LENGTH,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            discussion: DiscussionConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from an optional `config/<env>` file plus
    /// `COLLOQUY__`-prefixed environment variables. Missing sources fall
    /// back to the built-in defaults.
    pub fn new() -> Result<Self, ConfigError> {
        let config_env = env::var("CONFIG_ENV").unwrap_or_else(|_| "default".to_string());

        let config = Config::builder()
            .add_source(File::with_name(&format!("config/{}", config_env)).required(false))
            .add_source(Environment::with_prefix("COLLOQUY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
