//! Franchise domain model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Industry category a franchise belongs to.
///
/// The serialized form is the human-readable label used across the catalog
/// fixtures (e.g. `"Food & Beverage"`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum Industry {
    #[serde(rename = "Food & Beverage")]
    #[strum(serialize = "Food & Beverage")]
    FoodAndBeverage,
    #[serde(rename = "Health & Fitness")]
    #[strum(serialize = "Health & Fitness")]
    HealthAndFitness,
    #[serde(rename = "Healthcare")]
    #[strum(serialize = "Healthcare")]
    Healthcare,
    #[serde(rename = "Services")]
    #[strum(serialize = "Services")]
    Services,
}

/// A franchise opportunity offered by the catalog.
///
/// Records are created once when the catalog is loaded and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FranchiseRecord {
    /// Unique franchise identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// One-line marketing tagline
    #[serde(default)]
    pub tagline: String,
    /// Industry category
    pub industry: Industry,
    /// Minimum total investment in dollars
    pub investment_min: u64,
    /// Maximum total investment in dollars
    pub investment_max: u64,
    /// Return on investment, in percent
    pub roi: u32,
    /// Share of units that succeed, 0-100
    pub success_rate: u8,
    /// Advisor match score, 0-100
    pub match_score: u8,
    /// Number of units currently operating
    pub active_units: u32,
    /// Average yearly revenue per unit in dollars
    pub avg_revenue: u64,
    /// Description of the onboarding program
    #[serde(default)]
    pub training: String,
    /// Year the franchise was founded
    #[serde(default)]
    pub established: u16,
    /// Territories still open for new owners
    pub territories_available: u32,
    /// Owner satisfaction, 0.0-5.0
    pub satisfaction_score: f32,
    /// Typical months until a unit turns a profit
    pub months_to_profitability: u32,
    /// Franchisor support rating, 0.0-5.0
    pub support_rating: f32,
}

impl FranchiseRecord {
    /// Formats the investment range the way franchise cards show it,
    /// e.g. `$150k - $350k`.
    pub fn investment_range_label(&self) -> String {
        format!(
            "{} - {}",
            thousands_label(self.investment_min),
            thousands_label(self.investment_max)
        )
    }

    /// Liquid capital an applicant must hold: 30% of the minimum investment.
    pub fn liquid_capital_required(&self) -> u64 {
        self.investment_min * 3 / 10
    }

    /// Splits the minimum investment into its cost components.
    ///
    /// Shares are 25% franchise fee, 35% equipment, 25% real estate and
    /// 15% working capital.
    pub fn investment_breakdown(&self) -> [(&'static str, u64); 4] {
        let share = |percent: u64| self.investment_min * percent / 100;
        [
            ("Franchise Fee", share(25)),
            ("Equipment", share(35)),
            ("Real Estate", share(25)),
            ("Working Capital", share(15)),
        ]
    }

    /// Checks the numeric invariants of a record.
    ///
    /// Returns a description of the first violation found.
    pub fn validate(&self) -> Result<(), String> {
        if self.investment_min > self.investment_max {
            return Err(format!(
                "franchise '{}': investment_min {} exceeds investment_max {}",
                self.id, self.investment_min, self.investment_max
            ));
        }
        if self.success_rate > 100 || self.match_score > 100 {
            return Err(format!(
                "franchise '{}': percentages must be within 0-100",
                self.id
            ));
        }
        if !(0.0..=5.0).contains(&self.satisfaction_score)
            || !(0.0..=5.0).contains(&self.support_rating)
        {
            return Err(format!(
                "franchise '{}': ratings must be within 0.0-5.0",
                self.id
            ));
        }
        Ok(())
    }
}

/// Renders a dollar amount in whole thousands (`$150k`).
pub fn thousands_label(amount: u64) -> String {
    format!("${}k", (amount as f64 / 1000.0).round() as u64)
}
