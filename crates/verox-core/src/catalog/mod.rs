//! Catalog domain module.
//!
//! The catalog is the static, read-only data set the advisor recommends
//! from: franchise records plus the CRM lead records shown on the dashboard.
//! It is built once and then shared by every session behind an `Arc`.
//!
//! # Module Structure
//!
//! - `franchise`: `FranchiseRecord` and `Industry`
//! - `lead`: `LeadRecord`, `LeadQuality`, `PipelineStage`, `Sentiment`
//! - `seed`: built-in reference fixture
//! - `repository`: `CatalogRepository` trait and the seed-backed implementation

mod franchise;
mod lead;
mod repository;
mod seed;

pub use franchise::{FranchiseRecord, Industry, thousands_label};
pub use lead::{LeadQuality, LeadRecord, PipelineStage, Sentiment};
pub use repository::{CatalogRepository, SeedCatalogRepository};
pub use seed::{CONVERSATION_STARTERS, GREETING};

use crate::error::{Result, VeroxError};
use chrono::Utc;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

static REFERENCE: Lazy<Arc<Catalog>> = Lazy::new(|| {
    let loaded_at = Utc::now();
    Arc::new(Catalog {
        franchises: seed::franchises().into_iter().map(Arc::new).collect(),
        leads: seed::dashboard_leads(loaded_at)
            .into_iter()
            .map(Arc::new)
            .collect(),
        roster_extras: seed::roster_extra_leads(loaded_at)
            .into_iter()
            .map(Arc::new)
            .collect(),
    })
});

/// Immutable collection of franchise and lead records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Franchises in their natural (display) order
    #[serde(default, rename = "franchise")]
    franchises: Vec<Arc<FranchiseRecord>>,
    /// Leads shown on the dashboard home view
    #[serde(default, rename = "lead")]
    leads: Vec<Arc<LeadRecord>>,
    /// Leads that only appear on the full roster
    #[serde(default, rename = "roster_lead")]
    roster_extras: Vec<Arc<LeadRecord>>,
}

impl Catalog {
    /// Builds a catalog after checking every record invariant.
    ///
    /// # Errors
    ///
    /// Returns `VeroxError::InvalidCatalog` when a record is malformed or
    /// when two franchises (or two leads) share an id.
    pub fn new(franchises: Vec<FranchiseRecord>, leads: Vec<LeadRecord>) -> Result<Self> {
        let catalog = Self {
            franchises: franchises.into_iter().map(Arc::new).collect(),
            leads: leads.into_iter().map(Arc::new).collect(),
            roster_extras: Vec::new(),
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Returns a catalog with only the given franchises and no leads.
    ///
    /// Mostly useful for exercising the recommendation engine against
    /// hand-picked record sets.
    pub fn from_franchises(franchises: Vec<FranchiseRecord>) -> Result<Self> {
        Self::new(franchises, Vec::new())
    }

    /// The built-in reference catalog: five franchises and four dashboard
    /// leads (plus four roster-only leads).
    ///
    /// Built on first access; lead timestamps are relative to that moment.
    pub fn reference() -> Arc<Catalog> {
        REFERENCE.clone()
    }

    /// Checks record invariants and id uniqueness.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for franchise in &self.franchises {
            franchise.validate().map_err(VeroxError::invalid_catalog)?;
            if !seen.insert(franchise.id.as_str()) {
                return Err(VeroxError::invalid_catalog(format!(
                    "duplicate franchise id '{}'",
                    franchise.id
                )));
            }
        }

        let mut seen = HashSet::new();
        for lead in self.roster() {
            lead.validate().map_err(VeroxError::invalid_catalog)?;
            if !seen.insert(lead.id.as_str()) {
                return Err(VeroxError::invalid_catalog(format!(
                    "duplicate lead id '{}'",
                    lead.id
                )));
            }
        }
        Ok(())
    }

    pub fn franchises(&self) -> &[Arc<FranchiseRecord>] {
        &self.franchises
    }

    /// Leads shown on the dashboard.
    pub fn leads(&self) -> &[Arc<LeadRecord>] {
        &self.leads
    }

    /// Every lead: dashboard leads first, then roster-only leads.
    pub fn roster(&self) -> impl Iterator<Item = &Arc<LeadRecord>> {
        self.leads.iter().chain(self.roster_extras.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.franchises.is_empty()
    }

    pub fn find_franchise(&self, id: &str) -> Option<Arc<FranchiseRecord>> {
        self.franchises.iter().find(|f| f.id == id).cloned()
    }

    /// Looks a franchise up by display name, ignoring case.
    pub fn find_franchise_by_name(&self, name: &str) -> Option<Arc<FranchiseRecord>> {
        self.franchises
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
            .cloned()
    }

    /// Looks a lead up across the full roster.
    pub fn find_lead(&self, id: &str) -> Option<Arc<LeadRecord>> {
        self.roster().find(|l| l.id == id).cloned()
    }
}
