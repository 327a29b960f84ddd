//! TOML-based CatalogRepository implementation.
//!
//! A catalog file holds `[[franchise]]`, `[[lead]]` and optionally
//! `[[roster_lead]]` tables with the same fields as the domain records.
//! Lead timestamps are RFC 3339 strings.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use verox_core::catalog::{Catalog, CatalogRepository};
use verox_core::error::{Result, VeroxError};

/// Loads the catalog from a TOML fixture file.
#[derive(Debug, Clone)]
pub struct TomlCatalogRepository {
    path: PathBuf,
}

impl TomlCatalogRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses and validates catalog text.
    pub fn parse(text: &str) -> Result<Catalog> {
        let catalog: Catalog = toml::from_str(text)?;
        if catalog.is_empty() {
            return Err(VeroxError::invalid_catalog("catalog has no franchises"));
        }
        catalog.validate()?;
        Ok(catalog)
    }
}

#[async_trait]
impl CatalogRepository for TomlCatalogRepository {
    async fn load(&self) -> Result<Arc<Catalog>> {
        let text = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                VeroxError::not_found("Catalog file", self.path.display().to_string())
            } else {
                VeroxError::from(e)
            }
        })?;

        let catalog = Self::parse(&text)?;
        tracing::debug!(
            "[TomlCatalogRepository] Loaded {} franchises from {}",
            catalog.franchises().len(),
            self.path.display()
        );
        Ok(Arc::new(catalog))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use verox_core::advisor::{Intent, recommend};
    use verox_core::catalog::{Industry, LeadQuality};

    const FIXTURE: &str = r#"
[[franchise]]
id = "a"
name = "Taco Town"
industry = "Food & Beverage"
investment_min = 90000
investment_max = 180000
roi = 20
success_rate = 88
match_score = 80
active_units = 40
avg_revenue = 500000
territories_available = 12
satisfaction_score = 4.2
months_to_profitability = 14
support_rating = 4.0

[[franchise]]
id = "b"
name = "Care Corner"
industry = "Healthcare"
investment_min = 300000
investment_max = 500000
roi = 25
success_rate = 91
match_score = 90
active_units = 10
avg_revenue = 900000
territories_available = 5
satisfaction_score = 4.6
months_to_profitability = 20
support_rating = 4.5

[[lead]]
id = "1"
name = "Dana Lee"
email = "dana@example.com"
phone = "+1 555 0100"
quality = "hot"
stage = "negotiating"
budget = "$100k-$200k"
timeline = "3 months"
last_message = "Ready to talk numbers"
timestamp = "2026-01-05T10:00:00Z"
sentiment = "positive"
intent_score = 90
franchise = "Taco Town"
"#;

    fn write_fixture(dir: &TempDir, text: &str) -> PathBuf {
        let path = dir.path().join("catalog.toml");
        std::fs::write(&path, text).unwrap();
        path
    }

    #[tokio::test]
    async fn test_load_fixture() {
        let dir = TempDir::new().unwrap();
        let repo = TomlCatalogRepository::new(write_fixture(&dir, FIXTURE));

        let catalog = repo.load().await.unwrap();
        assert_eq!(catalog.franchises().len(), 2);
        assert_eq!(catalog.franchises()[1].industry, Industry::Healthcare);
        assert_eq!(catalog.franchises()[0].tagline, "");
        assert_eq!(catalog.leads()[0].quality, LeadQuality::Hot);

        let food = recommend(Intent::FoodAndBeverage, &catalog);
        assert_eq!(food.len(), 1);
        assert_eq!(food[0].name, "Taco Town");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let repo = TomlCatalogRepository::new(dir.path().join("absent.toml"));
        assert!(repo.load().await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_duplicate_ids_rejected() {
        let dir = TempDir::new().unwrap();
        let text = FIXTURE.replace("id = \"b\"", "id = \"a\"");
        let repo = TomlCatalogRepository::new(write_fixture(&dir, &text));
        assert!(repo.load().await.unwrap_err().is_invalid_catalog());
    }

    #[test]
    fn test_out_of_range_score_rejected() {
        let text = FIXTURE.replace("match_score = 90", "match_score = 140");
        assert!(TomlCatalogRepository::parse(&text).unwrap_err().is_invalid_catalog());
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(TomlCatalogRepository::parse("").unwrap_err().is_invalid_catalog());
    }

    #[test]
    fn test_malformed_toml() {
        assert!(TomlCatalogRepository::parse("[[franchise]]\nid = ").unwrap_err().is_serialization());
    }
}
