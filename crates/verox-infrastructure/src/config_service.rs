//! Configuration service implementation.
//!
//! This module provides a ConfigService that loads the application
//! configuration from the configuration file (~/.config/verox/config.toml).

use crate::paths::VeroxPaths;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use verox_core::config::AppConfig;
use verox_core::error::{Result, VeroxError};

/// Configuration service that loads and caches the application configuration.
///
/// A missing file is created with the default configuration on first load.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit file location; `None` means the platform default
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    /// Creates a ConfigService for the default config file.
    ///
    /// The configuration is loaded lazily on first access.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a ConfigService reading from `path` instead of the default.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Resolves the config file location.
    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => VeroxPaths::config_file().map_err(|e| VeroxError::config(e.to_string())),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    ///
    /// Falls back to the defaults when the file cannot be read or parsed.
    pub fn get_config(&self) -> AppConfig {
        if let Some(cached) = self
            .config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return cached.clone();
        }

        self.load().unwrap_or_else(|e| {
            tracing::warn!("[ConfigService] Using default configuration: {}", e);
            AppConfig::default()
        })
    }

    /// Reads the config file into the cache, creating it with defaults if it
    /// is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, written or parsed. The
    /// cache is left untouched in that case.
    pub fn load(&self) -> Result<AppConfig> {
        let path = self.config_path()?;
        let config = if path.exists() {
            let text = std::fs::read_to_string(&path)?;
            let config: AppConfig = toml::from_str(&text)?;
            tracing::debug!("[ConfigService] Loaded config from {}", path.display());
            config
        } else {
            let config = AppConfig::default();
            write_config(&path, &config)?;
            tracing::info!("[ConfigService] Created default config at {}", path.display());
            config
        };

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = Some(config.clone());
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

fn write_config(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(config)?;
    std::fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_default_when_missing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let service = ConfigService::with_path(&path);

        let config = service.get_config();
        assert_eq!(config, AppConfig::default());
        assert!(path.exists());

        let written: AppConfig = toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, AppConfig::default());
    }

    #[test]
    fn test_reads_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chat]\nreply_delay_ms = 250\n\n[logging]\nlevel = \"debug\"\n")
            .unwrap();

        let config = ConfigService::with_path(&path).get_config();
        assert_eq!(config.chat.reply_delay_ms, 250);
        assert_eq!(config.chat.title_max_chars, 30);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_cache_until_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let service = ConfigService::with_path(&path);
        assert_eq!(service.get_config().chat.reply_delay_ms, 1500);

        std::fs::write(&path, "[chat]\nreply_delay_ms = 5\n").unwrap();
        assert_eq!(service.get_config().chat.reply_delay_ms, 1500);

        assert_eq!(service.load().unwrap().chat.reply_delay_ms, 5);
        assert_eq!(service.get_config().chat.reply_delay_ms, 5);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chat]\nreply_delay_ms = \"soon\"\n").unwrap();

        let service = ConfigService::with_path(&path);
        assert!(service.load().unwrap_err().is_serialization());
        assert_eq!(service.get_config(), AppConfig::default());
    }

    #[test]
    fn test_load_fills_cache() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"warn\"\n").unwrap();
        let service = ConfigService::with_path(&path);

        assert_eq!(service.load().unwrap().logging.level, "warn");
        std::fs::remove_file(&path).unwrap();
        assert_eq!(service.get_config().logging.level, "warn");
        assert!(!path.exists());
    }
}
