//! Evaluates today's spend against the resolved daily limit.

use mensa_domain::BudgetAlert;

pub struct AlertService;

impl AlertService {
    /// Computes budget progress and the over-budget flag.
    ///
    /// With no usable limit the alert is inert (`0%`, not over). Spend
    /// exactly equal to the limit is 100% but not over; only strictly
    /// greater spend trips the flag.
    pub fn evaluate(today_spend: f64, daily_limit: Option<f64>) -> BudgetAlert {
        let limit = match daily_limit {
            Some(limit) if limit > 0.0 => limit,
            _ => return BudgetAlert::default(),
        };
        BudgetAlert {
            progress_percent: (today_spend / limit * 100.0).min(100.0).max(0.0),
            is_over_budget: today_spend > limit,
        }
    }
}
