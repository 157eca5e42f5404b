//! Derived spending aggregates. Computed per view refresh, never persisted.

use serde::{Deserialize, Serialize};

/// Rolling spending totals over the trailing week.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct SpendingSummary {
    pub today: f64,
    pub this_week: f64,
    /// `this_week / 7`, a 7-day rolling average regardless of how many
    /// days actually saw activity.
    pub daily_average: f64,
}

/// Aggregated spend for one observed menu category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySpending {
    pub category: String,
    pub amount: f64,
    pub count: usize,
}

/// Today's spend measured against the resolved daily limit.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct BudgetAlert {
    /// Clamped to `[0, 100]`.
    pub progress_percent: f64,
    pub is_over_budget: bool,
}
