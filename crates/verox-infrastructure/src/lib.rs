//! Infrastructure layer for VeroX.
//!
//! File-system concerns: config directory resolution, the TOML config file
//! and catalog fixtures loaded from disk.

pub mod config_service;
pub mod paths;
pub mod toml_catalog_repository;

pub use config_service::ConfigService;
pub use paths::{PathError, VeroxPaths};
pub use toml_catalog_repository::TomlCatalogRepository;
