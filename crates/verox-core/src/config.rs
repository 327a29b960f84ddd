//! Application configuration model.
//!
//! Loading and storage live in `verox-infrastructure`; this module only
//! defines the shape and the defaults.

use crate::session::DEFAULT_TITLE_MAX_CHARS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default simulated latency before the advisor answers.
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1500;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Delay between a user message and the assistant reply
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,
    /// Characters kept from the first user message for sidebar titles
    #[serde(default = "default_title_max_chars")]
    pub title_max_chars: usize,
}

impl ChatConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            title_max_chars: DEFAULT_TITLE_MAX_CHARS,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogConfig {
    /// TOML fixture to load instead of the built-in catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Root of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_reply_delay_ms() -> u64 {
    DEFAULT_REPLY_DELAY_MS
}

fn default_title_max_chars() -> usize {
    DEFAULT_TITLE_MAX_CHARS
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.chat.reply_delay(), Duration::from_millis(1500));
        assert_eq!(config.chat.title_max_chars, 30);
        assert!(config.catalog.path.is_none());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str("[chat]\nreply_delay_ms = 10\n").unwrap();
        assert_eq!(config.chat.reply_delay_ms, 10);
        assert_eq!(config.chat.title_max_chars, 30);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = AppConfig::default();
        config.catalog.path = Some(PathBuf::from("/tmp/catalog.toml"));
        let text = toml::to_string(&config).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
