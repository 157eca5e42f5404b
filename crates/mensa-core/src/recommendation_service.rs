//! Builds the daily budget-constrained menu recommendation.

use chrono::NaiveDate;
use uuid::Uuid;

use mensa_domain::{round_currency, DailyLimit, MenuItem, Recommendation};

/// How many affordable items a recommendation picks at most.
pub const RECOMMENDATION_ITEM_CAP: usize = 3;

/// Stateless recommendation construction.
///
/// Selection is a greedy "first N affordable" pass over the items in the
/// order supplied, not cost-optimal packing. That simplification is
/// intentional and matches the product behavior.
pub struct RecommendationService;

impl RecommendationService {
    /// Builds (or returns) the recommendation for `(user_id, date)`.
    ///
    /// A stored recommendation is returned verbatim; generation happens at
    /// most once per day. Without a resolved limit, or with nothing
    /// affordable, no recommendation is produced.
    pub fn build(
        user_id: Uuid,
        date: NaiveDate,
        available: &[MenuItem],
        limit: Option<&DailyLimit>,
        existing: Option<Recommendation>,
    ) -> Option<Recommendation> {
        if let Some(stored) = existing {
            return Some(stored);
        }
        let limit = limit?;

        let affordable: Vec<&MenuItem> = available
            .iter()
            .filter(|item| item.price > 0.0 && item.price <= limit.per_day)
            .collect();
        if affordable.is_empty() {
            return None;
        }

        let selected = &affordable[..affordable.len().min(RECOMMENDATION_ITEM_CAP)];
        let total = round_currency(selected.iter().map(|item| item.price).sum());
        let reason = format!(
            "Based on your {} budget of ${}",
            limit.cadence, limit.budget_amount
        );
        Some(Recommendation::new(
            user_id,
            date,
            selected.iter().map(|item| item.id).collect(),
            total,
            reason,
        ))
    }
}
