//! Catalog repository trait.
//!
//! Defines the interface for loading the catalog at startup.

use super::Catalog;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// An abstract source for the catalog.
///
/// The catalog is loaded once at process start and then shared read-only,
/// so the contract has a single operation.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Loads the catalog.
    ///
    /// # Returns
    ///
    /// - `Ok(Arc<Catalog>)`: A validated catalog
    /// - `Err(_)`: The source could not be read or holds invalid records
    async fn load(&self) -> Result<Arc<Catalog>>;
}

/// Serves the built-in reference catalog.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeedCatalogRepository;

#[async_trait]
impl CatalogRepository for SeedCatalogRepository {
    async fn load(&self) -> Result<Arc<Catalog>> {
        Ok(Catalog::reference())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_repository_returns_reference() {
        let catalog = SeedCatalogRepository.load().await.unwrap();
        assert!(Arc::ptr_eq(&catalog, &Catalog::reference()));
    }
}
