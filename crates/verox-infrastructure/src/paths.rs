//! Path management for VeroX configuration files.
//!
//! Directories are resolved with the `dirs` crate so that every platform
//! gets its conventional location.

use std::path::PathBuf;
use thiserror::Error;

const APP_DIR_NAME: &str = "verox";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that can occur during path resolution.
#[derive(Debug, Error)]
pub enum PathError {
    /// The platform config directory could not be determined.
    #[error("Cannot find config directory")]
    ConfigDirNotFound,
}

/// Unified path management for VeroX.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/verox/          # Config directory
/// ├── config.toml           # Application configuration
/// └── catalog.toml          # Catalog fixture, used when [catalog] path is unset
/// ```
pub struct VeroxPaths;

impl VeroxPaths {
    /// Returns the VeroX configuration directory (e.g. `~/.config/verox/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Default location of a user-provided catalog fixture.
    pub fn default_catalog_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("catalog.toml"))
    }
}
