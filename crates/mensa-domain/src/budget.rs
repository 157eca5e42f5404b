//! Domain models for user spending budgets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;
use crate::money::round_currency;

/// A user's spending budget over a daily or weekly cadence.
///
/// Superseding a budget of the same cadence deactivates the prior one
/// rather than deleting it; only `is_active` and `amount` ever change
/// after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub cadence: BudgetCadence,
    pub amount: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Budget {
    pub fn new(user_id: Uuid, cadence: BudgetCadence, amount: f64, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            cadence,
            amount,
            is_active: true,
            created_at,
        }
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

impl Identifiable for Budget {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Budget {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Budget {
    fn display_label(&self) -> String {
        format!("{} budget of ${}", self.cadence, self.amount)
    }
}

/// A budget amount normalized to a per-day ceiling, carrying the facts of
/// its source budget for presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyLimit {
    pub per_day: f64,
    pub cadence: BudgetCadence,
    pub budget_amount: f64,
}

impl DailyLimit {
    /// Normalizes a budget to its per-day ceiling: the amount unchanged for
    /// a daily cadence, the amount over seven days for a weekly one.
    pub fn from_budget(budget: &Budget) -> Self {
        let per_day = match budget.cadence {
            BudgetCadence::Daily => budget.amount,
            BudgetCadence::Weekly => round_currency(budget.amount / 7.0),
        };
        Self {
            per_day,
            cadence: budget.cadence,
            budget_amount: budget.amount,
        }
    }
}
