//! Recommendation engine.

use super::intent::Intent;
use crate::catalog::{Catalog, FranchiseRecord, Industry};
use std::sync::Arc;

/// Maximum minimum-investment for budget-conscious recommendations.
pub const BUDGET_CEILING: u64 = 200_000;

/// Number of records returned for a general request.
pub const GENERAL_LIMIT: usize = 4;

/// Maps an intent to an ordered list of franchises from the catalog.
///
/// The result is a fresh vector; the catalog is never reordered. An empty
/// result is a normal outcome and means nothing matched.
///
/// - `FoodAndBeverage`: Food & Beverage records, catalog order
/// - `Healthcare`: Healthcare and Health & Fitness records, catalog order
/// - `BudgetConscious`: `investment_min <= 200_000`, highest match score
///   first (ties keep catalog order)
/// - `General`: the first four records
pub fn recommend(intent: Intent, catalog: &Catalog) -> Vec<Arc<FranchiseRecord>> {
    let franchises = catalog.franchises();
    match intent {
        Intent::FoodAndBeverage => filter_industry(franchises, |i| i == Industry::FoodAndBeverage),
        Intent::Healthcare => filter_industry(franchises, |i| {
            matches!(i, Industry::Healthcare | Industry::HealthAndFitness)
        }),
        Intent::BudgetConscious => {
            let mut matches: Vec<_> = franchises
                .iter()
                .filter(|f| f.investment_min <= BUDGET_CEILING)
                .cloned()
                .collect();
            // sort_by is stable
            matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));
            matches
        }
        Intent::General => franchises.iter().take(GENERAL_LIMIT).cloned().collect(),
    }
}

fn filter_industry(
    franchises: &[Arc<FranchiseRecord>],
    accept: impl Fn(Industry) -> bool,
) -> Vec<Arc<FranchiseRecord>> {
    franchises
        .iter()
        .filter(|f| accept(f.industry))
        .cloned()
        .collect()
}
