pub mod catalog;
pub mod chat;
pub mod config;
pub mod inbox;
pub mod leads;
pub mod recommend;

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;
use verox_core::catalog::{Catalog, CatalogRepository, SeedCatalogRepository};
use verox_core::config::AppConfig;
use verox_infrastructure::{TomlCatalogRepository, VeroxPaths};

/// Resolves the catalog fixture to load, if any.
///
/// `[catalog] path` wins; otherwise `default_file` is used when it exists.
fn catalog_file(config: &AppConfig, default_file: Option<PathBuf>) -> Option<PathBuf> {
    config
        .catalog
        .path
        .clone()
        .or_else(|| default_file.filter(|path| path.is_file()))
}

/// Picks the catalog source: a TOML fixture when one is configured or
/// present in the config directory, the built-in reference data otherwise.
pub fn catalog_repository(config: &AppConfig) -> Box<dyn CatalogRepository> {
    match catalog_file(config, VeroxPaths::default_catalog_file().ok()) {
        Some(path) => {
            tracing::debug!("[catalog] Loading fixture {}", path.display());
            Box::new(TomlCatalogRepository::new(path))
        }
        None => Box::new(SeedCatalogRepository),
    }
}

pub async fn load_catalog(config: &AppConfig) -> Result<Arc<Catalog>> {
    catalog_repository(config)
        .load()
        .await
        .context("Failed to load catalog")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_configured_path_takes_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let default_file = temp_dir.path().join("catalog.toml");
        std::fs::write(&default_file, "").unwrap();

        let mut config = AppConfig::default();
        config.catalog.path = Some(PathBuf::from("/srv/fixtures/catalog.toml"));
        assert_eq!(
            catalog_file(&config, Some(default_file)),
            Some(PathBuf::from("/srv/fixtures/catalog.toml"))
        );
    }

    #[test]
    fn test_default_file_used_only_when_present() {
        let temp_dir = TempDir::new().unwrap();
        let default_file = temp_dir.path().join("catalog.toml");
        let config = AppConfig::default();

        assert_eq!(catalog_file(&config, Some(default_file.clone())), None);
        assert_eq!(catalog_file(&config, None), None);

        std::fs::write(&default_file, "").unwrap();
        assert_eq!(catalog_file(&config, Some(default_file.clone())), Some(default_file));
    }
}
