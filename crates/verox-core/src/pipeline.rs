//! Lead pipeline queries for the CRM dashboard.

use crate::catalog::{LeadQuality, LeadRecord, PipelineStage};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Filter applied to the leads roster.
///
/// An empty query and `None` selectors match every lead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadFilter {
    /// Case-insensitive search over name, email and franchise
    pub query: String,
    pub quality: Option<LeadQuality>,
    pub stage: Option<PipelineStage>,
}

impl LeadFilter {
    pub fn matches(&self, lead: &LeadRecord) -> bool {
        let query = self.query.trim().to_lowercase();
        let matches_search = query.is_empty()
            || lead.name.to_lowercase().contains(&query)
            || lead.email.to_lowercase().contains(&query)
            || lead.franchise.to_lowercase().contains(&query);
        let matches_quality = self.quality.is_none_or(|q| lead.quality == q);
        let matches_stage = self.stage.is_none_or(|s| lead.stage == s);
        matches_search && matches_quality && matches_stage
    }

    /// Keeps matching leads in their original order.
    pub fn apply<'a>(
        &self,
        leads: impl IntoIterator<Item = &'a Arc<LeadRecord>>,
    ) -> Vec<Arc<LeadRecord>> {
        leads
            .into_iter()
            .filter(|lead| self.matches(lead))
            .cloned()
            .collect()
    }
}

/// Aggregate numbers shown on the dashboard cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStats {
    pub total: usize,
    pub hot: usize,
    pub warm: usize,
    pub cold: usize,
    /// Leads in the interested or negotiating stage
    pub active_conversations: usize,
    /// Lead count per stage, in pipeline order; stages without leads are omitted
    pub stage_distribution: BTreeMap<PipelineStage, usize>,
}

impl PipelineStats {
    pub fn from_leads<'a>(leads: impl IntoIterator<Item = &'a Arc<LeadRecord>>) -> Self {
        let mut stats = Self::default();
        for lead in leads {
            stats.total += 1;
            match lead.quality {
                LeadQuality::Hot => stats.hot += 1,
                LeadQuality::Warm => stats.warm += 1,
                LeadQuality::Cold => stats.cold += 1,
            }
            if lead.stage.is_active_conversation() {
                stats.active_conversations += 1;
            }
            *stats.stage_distribution.entry(lead.stage).or_default() += 1;
        }
        stats
    }

    /// Share of leads in `stage`, as a percentage of the total.
    pub fn stage_share(&self, stage: PipelineStage) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let count = self.stage_distribution.get(&stage).copied().unwrap_or(0);
        count as f64 / self.total as f64 * 100.0
    }
}
