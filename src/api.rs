//! Composition glue sequencing store reads through the pure services.
//!
//! Every call threads an explicit `user_id`; there is no ambient
//! current-user state. Authentication and role gating stay with the
//! external collaborator that owns the store.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use mensa_core::{
    AlertService, BudgetService, CafeteriaStore, Clock, CoreError, RecommendationService,
    SpendingService,
};
use mensa_domain::{
    day_key, BudgetAlert, CategorySpending, DailyLimit, MenuItem, Purchase, Recommendation,
    SpendingSummary,
};

/// Everything a spending dashboard refresh needs, computed in one pass.
#[derive(Debug, Clone)]
pub struct SpendingOverview {
    pub summary: SpendingSummary,
    pub categories: Vec<CategorySpending>,
    pub alert: BudgetAlert,
    pub daily_limit: Option<DailyLimit>,
}

/// Returns today's recommendation for the user, generating it at most once.
///
/// Fetches any stored recommendation first, then budgets, the daily limit,
/// and today's menu, and finally creates the built recommendation if still
/// absent. A uniqueness conflict from a concurrent caller is resolved by
/// re-reading and returning the stored record.
pub fn daily_recommendation(
    store: &dyn CafeteriaStore,
    user_id: Uuid,
    clock: &dyn Clock,
) -> Result<Option<Recommendation>, CoreError> {
    let date = day_key(clock.now());
    if let Some(stored) = store.recommendation_for(user_id, date)? {
        return Ok(Some(stored));
    }

    let budgets = store.budgets_for(user_id)?;
    let limit = match BudgetService::resolve_daily_limit(&budgets) {
        Some(limit) => limit,
        None => return Ok(None),
    };

    let items = store.available_menu_items(date)?;
    let built = match RecommendationService::build(user_id, date, &items, Some(&limit), None) {
        Some(rec) => rec,
        None => return Ok(None),
    };

    match store.create_recommendation(built) {
        Ok(created) => Ok(Some(created)),
        Err(err) if err.is_conflict() => store.recommendation_for(user_id, date),
        Err(err) => Err(err),
    }
}

/// Computes the spending summary, category breakdown, and budget alert for
/// one view refresh.
///
/// The summary always covers the trailing 7 days; `analytics_window_days`
/// (30 by default via `mensa_config::Config`) bounds the category
/// breakdown and is clamped to at least the summary week.
pub fn spending_overview(
    store: &dyn CafeteriaStore,
    user_id: Uuid,
    clock: &dyn Clock,
    analytics_window_days: u32,
) -> Result<SpendingOverview, CoreError> {
    let now = clock.now();
    let window_days = analytics_window_days.max(7) as i64;
    let window_start = day_key(now) - Duration::days(window_days - 1);
    let since =
        DateTime::from_naive_utc_and_offset(window_start.and_time(chrono::NaiveTime::MIN), Utc);
    let purchases = store.purchases_since(user_id, since)?;

    let summary = SpendingService::summarize(&purchases, now);
    let lookup = menu_lookup(store, &purchases)?;
    let categories = SpendingService::by_category(&purchases, |id| lookup.get(&id));

    let budgets = store.budgets_for(user_id)?;
    let daily_limit = BudgetService::resolve_daily_limit(&budgets);
    let alert = AlertService::evaluate(summary.today, daily_limit.map(|limit| limit.per_day));

    Ok(SpendingOverview {
        summary,
        categories,
        alert,
        daily_limit,
    })
}

/// Records a purchase of `quantity` units of a menu item at its current
/// price, validating at the boundary so the pure core only sees
/// well-formed facts.
pub fn record_purchase(
    store: &dyn CafeteriaStore,
    user_id: Uuid,
    menu_item_id: Uuid,
    quantity: u32,
    clock: &dyn Clock,
) -> Result<Purchase, CoreError> {
    if quantity == 0 {
        return Err(CoreError::Validation("quantity must be at least 1".into()));
    }
    let item = store
        .menu_item(menu_item_id)?
        .ok_or(CoreError::MenuItemNotFound(menu_item_id))?;
    if !item.is_available {
        return Err(CoreError::Validation(format!(
            "menu item {} is not available",
            item.name
        )));
    }
    if item.price <= 0.0 {
        return Err(CoreError::Validation(format!(
            "menu item {} has a non-positive price",
            item.name
        )));
    }
    store.create_purchase(Purchase::new(
        user_id,
        item.id,
        item.price,
        quantity,
        clock.now(),
    ))
}

fn menu_lookup(
    store: &dyn CafeteriaStore,
    purchases: &[Purchase],
) -> Result<HashMap<Uuid, MenuItem>, CoreError> {
    let mut lookup = HashMap::new();
    for purchase in purchases {
        if lookup.contains_key(&purchase.menu_item_id) {
            continue;
        }
        if let Some(item) = store.menu_item(purchase.menu_item_id)? {
            lookup.insert(purchase.menu_item_id, item);
        }
    }
    Ok(lookup)
}
