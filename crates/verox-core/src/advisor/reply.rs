//! Canned assistant replies.

use super::intent::{Intent, classify};
use super::recommend::recommend;
use crate::catalog::{Catalog, FranchiseRecord};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

impl Intent {
    /// The fixed reply the advisor gives for this intent.
    pub fn canned_response(self) -> &'static str {
        match self {
            Intent::FoodAndBeverage => {
                "Great! I've found some excellent food franchise opportunities for you. Based on your interest, I'm showing you top-rated food and beverage franchises with strong ROI and proven success rates."
            }
            Intent::Healthcare => {
                "Healthcare franchises are experiencing rapid growth! I've identified opportunities in the healthcare sector with excellent long-term potential and strong market demand."
            }
            Intent::BudgetConscious => {
                "I understand you're looking for opportunities with lower investment requirements and passive income potential. I've found franchises that match your budget and offer excellent semi-passive models."
            }
            Intent::General => {
                "I'd be happy to help you find the perfect franchise! Based on typical investor profiles, here are some of our top-performing franchises across various industries. Each has been carefully analyzed by our AI to ensure quality and profitability."
            }
        }
    }
}

/// Everything the advisor produces for one user message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorReply {
    pub intent: Intent,
    pub text: String,
    pub recommendations: Vec<Arc<FranchiseRecord>>,
}

/// Classifies `text`, runs the engine and picks the canned response.
pub fn advise(text: &str, catalog: &Catalog) -> AdvisorReply {
    let intent = classify(text);
    AdvisorReply {
        intent,
        text: intent.canned_response().to_string(),
        recommendations: recommend(intent, catalog),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_each_intent_has_distinct_response() {
        let responses: std::collections::HashSet<_> =
            Intent::iter().map(Intent::canned_response).collect();
        assert_eq!(responses.len(), 4);
    }

    #[test]
    fn test_advise_matches_parts() {
        let catalog = Catalog::reference();
        let reply = advise("Show me food franchises", &catalog);
        assert_eq!(reply.intent, Intent::FoodAndBeverage);
        assert_eq!(reply.text, Intent::FoodAndBeverage.canned_response());
        assert_eq!(reply.recommendations, recommend(Intent::FoodAndBeverage, &catalog));
    }
}
