//! Keyword-based intent classification.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Category a free-text message is sorted into.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Intent {
    /// Food and beverage franchises.
    FoodAndBeverage,
    /// Healthcare and fitness franchises.
    Healthcare,
    /// Lower-investment or passive-income opportunities.
    BudgetConscious,
    /// Anything else.
    General,
}

/// Ordered matching rules. The first rule with a keyword contained in the
/// lowercased input wins.
const RULES: [(&[&str], Intent); 3] = [
    (&["food", "restaurant"], Intent::FoodAndBeverage),
    // "health" also catches fitness requests; the healthcare filter
    // includes Health & Fitness so the result stays consistent.
    (&["healthcare", "health"], Intent::Healthcare),
    (&["100k", "low", "passive"], Intent::BudgetConscious),
];

/// Classifies user text into an [`Intent`].
///
/// Matching is a case-insensitive substring search. The function is total:
/// text that matches no rule is `Intent::General`. Callers are expected to
/// reject empty input before classifying.
pub fn classify(text: &str) -> Intent {
    let lowered = text.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, intent)| *intent)
        .unwrap_or(Intent::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_keywords() {
        assert_eq!(classify("Show me food franchises"), Intent::FoodAndBeverage);
        assert_eq!(classify("any RESTAURANT ideas?"), Intent::FoodAndBeverage);
        assert_eq!(classify("FastFood"), Intent::FoodAndBeverage);
    }

    #[test]
    fn test_health_keywords() {
        assert_eq!(
            classify("What are the fastest-growing franchises in healthcare?"),
            Intent::Healthcare
        );
        assert_eq!(classify("Health & Fitness"), Intent::Healthcare);
    }

    #[test]
    fn test_budget_keywords() {
        assert_eq!(classify("I have $100K"), Intent::BudgetConscious);
        assert_eq!(classify("low-cost options"), Intent::BudgetConscious);
        assert_eq!(
            classify("I want passive income. Which franchises work best?"),
            Intent::BudgetConscious
        );
        // Substring match: "fLOWer" contains "low".
        assert_eq!(classify("flower shops"), Intent::BudgetConscious);
    }

    #[test]
    fn test_first_rule_wins() {
        // Contains food, health and 100k; food is checked first.
        assert_eq!(
            classify("I have $100k to invest. Show me food franchises"),
            Intent::FoodAndBeverage
        );
        assert_eq!(classify("low budget health clinic"), Intent::Healthcare);
    }

    #[test]
    fn test_general_fallback() {
        assert_eq!(classify("What do you recommend?"), Intent::General);
        assert_eq!(classify("cleaning business"), Intent::General);
    }

    #[test]
    fn test_surrounding_whitespace_is_irrelevant() {
        for text in ["food", "health", "passive", "hello"] {
            let padded = format!("  \t{text}\n ");
            assert_eq!(classify(text), classify(&padded));
        }
    }
}
