//! Aggregates purchase history into spending summaries and breakdowns.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use mensa_domain::{
    day_key, round_currency, week_window, CategorySpending, MenuItem, Purchase, SpendingSummary,
};

/// Category label used when a purchase's menu item cannot be resolved.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Stateless aggregation over pre-fetched purchase snapshots.
///
/// Callers pre-filter to a single user and a trailing window: 7 days for
/// [`SpendingService::summarize`], a longer configurable window (30 days by
/// default) for [`SpendingService::by_category`] analytics.
pub struct SpendingService;

impl SpendingService {
    /// Computes today's total, the trailing-week total, and the 7-day
    /// rolling daily average relative to `reference`.
    ///
    /// Sums accumulate at full precision; only the returned fields are
    /// rounded, so per-purchase rounding error never compounds.
    pub fn summarize(purchases: &[Purchase], reference: DateTime<Utc>) -> SpendingSummary {
        let today_key = day_key(reference);
        let window = week_window(reference);

        let mut today = 0.0;
        let mut this_week = 0.0;
        for purchase in purchases {
            let key = day_key(purchase.purchased_at);
            if key == today_key {
                today += purchase.amount;
            }
            if window.contains(key) {
                this_week += purchase.amount;
            }
        }

        SpendingSummary {
            today: round_currency(today),
            this_week: round_currency(this_week),
            // Always a 7-day average, not an average over active days.
            daily_average: round_currency(this_week / 7.0),
        }
    }

    /// Groups purchases by the referenced item's menu category.
    ///
    /// Purchases whose item cannot be resolved land in the explicit
    /// "Unknown" bucket rather than being dropped. Output is sorted by
    /// amount descending with ties keeping first-encountered order.
    pub fn by_category<'a, F>(purchases: &[Purchase], resolve: F) -> Vec<CategorySpending>
    where
        F: Fn(Uuid) -> Option<&'a MenuItem>,
    {
        let mut order: Vec<CategorySpending> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for purchase in purchases {
            let category = resolve(purchase.menu_item_id)
                .map(|item| item.category.clone())
                .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string());
            let slot = *index.entry(category.clone()).or_insert_with(|| {
                order.push(CategorySpending {
                    category,
                    amount: 0.0,
                    count: 0,
                });
                order.len() - 1
            });
            order[slot].amount += purchase.amount;
            order[slot].count += 1;
        }

        for entry in &mut order {
            entry.amount = round_currency(entry.amount);
        }
        // Stable sort keeps first-encountered order for equal amounts.
        order.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(std::cmp::Ordering::Equal));
        order
    }
}
