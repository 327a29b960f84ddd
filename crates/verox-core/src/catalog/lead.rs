//! Lead (prospective franchisee) domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// How urgently a lead should be followed up.
///
/// Variants are declared from least to most urgent so that the derived
/// ordering gives `Hot > Warm > Cold`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeadQuality {
    Cold,
    Warm,
    Hot,
}

/// Position of a lead in the sales pipeline.
///
/// The declaration order is the progression order. Nothing enforces
/// monotonic movement through the stages.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PipelineStage {
    New,
    Qualified,
    Interested,
    Negotiating,
    Closed,
}

impl PipelineStage {
    /// Whether a lead in this stage counts as an active conversation.
    pub fn is_active_conversation(self) -> bool {
        matches!(self, Self::Interested | Self::Negotiating)
    }
}

/// Tone detected in a lead's latest message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// A prospective franchisee tracked by the CRM dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub quality: LeadQuality,
    pub stage: PipelineStage,
    /// Free-text budget bracket, e.g. `$200k-$400k`
    pub budget: String,
    /// Free-text purchase timeline
    pub timeline: String,
    pub last_message: String,
    pub timestamp: DateTime<Utc>,
    pub sentiment: Sentiment,
    /// Purchase intent, 0-100
    pub intent_score: u8,
    /// Name of the franchise the lead is interested in
    pub franchise: String,
}

impl LeadRecord {
    pub fn validate(&self) -> Result<(), String> {
        if self.intent_score > 100 {
            return Err(format!(
                "lead '{}': intent_score {} exceeds 100",
                self.id, self.intent_score
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_quality_ordering() {
        assert!(LeadQuality::Hot > LeadQuality::Warm);
        assert!(LeadQuality::Warm > LeadQuality::Cold);
    }

    #[test]
    fn test_stage_progression_order() {
        assert!(PipelineStage::New < PipelineStage::Qualified);
        assert!(PipelineStage::Negotiating < PipelineStage::Closed);
        assert_eq!(PipelineStage::from_str("negotiating").unwrap(), PipelineStage::Negotiating);
        assert_eq!(PipelineStage::Interested.to_string(), "interested");
    }

    #[test]
    fn test_active_conversation_stages() {
        assert!(PipelineStage::Interested.is_active_conversation());
        assert!(PipelineStage::Negotiating.is_active_conversation());
        assert!(!PipelineStage::Closed.is_active_conversation());
        assert!(!PipelineStage::New.is_active_conversation());
    }
}
