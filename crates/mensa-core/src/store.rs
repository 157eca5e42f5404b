use std::collections::{HashMap, HashSet};

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use mensa_domain::{Budget, MenuItem, Purchase, Recommendation};

use crate::CoreError;

/// Abstraction over the external data collaborator holding budgets, menu
/// items, purchases, and recommendations.
///
/// Implementations must enforce at-most-one recommendation per
/// `(user_id, date)`: [`CafeteriaStore::create_recommendation`] fails with
/// [`CoreError::RecommendationExists`] when one is already stored, and the
/// check-and-insert must be atomic within the backend.
pub trait CafeteriaStore: Send + Sync {
    fn budgets_for(&self, user_id: Uuid) -> Result<Vec<Budget>, CoreError>;

    /// Stores a budget. Saving an active budget deactivates any prior
    /// active budget of the same cadence for that user.
    fn put_budget(&self, budget: Budget) -> Result<Budget, CoreError>;

    /// Items offered on `date`: available and dated exactly `date`, in
    /// insertion order.
    fn available_menu_items(&self, date: NaiveDate) -> Result<Vec<MenuItem>, CoreError>;

    fn put_menu_item(&self, item: MenuItem) -> Result<MenuItem, CoreError>;

    fn menu_item(&self, id: Uuid) -> Result<Option<MenuItem>, CoreError>;

    fn recommendation_for(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<Recommendation>, CoreError>;

    fn create_recommendation(&self, rec: Recommendation) -> Result<Recommendation, CoreError>;

    /// Purchases for `user_id` at or after `since`, oldest first.
    fn purchases_since(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<Purchase>, CoreError>;

    /// Appends a purchase record. Purchases are never updated or deleted.
    fn create_purchase(&self, purchase: Purchase) -> Result<Purchase, CoreError>;
}

/// Detects dangling references and consistency anomalies across a snapshot
/// of the stored collections.
pub fn catalog_warnings(
    budgets: &[Budget],
    items: &[MenuItem],
    purchases: &[Purchase],
) -> Vec<String> {
    let item_ids: HashSet<_> = items.iter().map(|item| item.id).collect();
    let mut warnings = Vec::new();

    for purchase in purchases {
        if !item_ids.contains(&purchase.menu_item_id) {
            warnings.push(format!(
                "purchase {} references unknown menu item {}",
                purchase.id, purchase.menu_item_id
            ));
        }
        if purchase.quantity == 0 {
            warnings.push(format!("purchase {} has zero quantity", purchase.id));
        }
    }

    let mut active_per_user: HashMap<(Uuid, mensa_domain::BudgetCadence), u32> = HashMap::new();
    for budget in budgets.iter().filter(|budget| budget.is_active) {
        *active_per_user
            .entry((budget.user_id, budget.cadence))
            .or_default() += 1;
    }
    for ((user_id, cadence), count) in active_per_user {
        if count > 1 {
            warnings.push(format!(
                "user {} has {} active {} budgets",
                user_id, count, cadence
            ));
        }
    }

    for item in items {
        if item.price <= 0.0 {
            warnings.push(format!(
                "menu item {} ({}) has non-positive price",
                item.id, item.name
            ));
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use mensa_domain::BudgetCadence;

    #[test]
    fn warnings_catch_dangling_purchases_and_duplicate_budgets() {
        let user = Uuid::new_v4();
        let now = Utc::now();
        let day = now.date_naive();
        let item = MenuItem::new("Soup", 3.0, "Starters", day);
        let budgets = vec![
            Budget::new(user, BudgetCadence::Daily, 10.0, now),
            Budget::new(user, BudgetCadence::Daily, 12.0, now),
        ];
        let orphan = Purchase::new(user, Uuid::new_v4(), 3.0, 1, now);
        let ok = Purchase::new(user, item.id, 3.0, 1, now);

        let warnings = catalog_warnings(&budgets, &[item], &[orphan.clone(), ok]);
        assert!(warnings
            .iter()
            .any(|w| w.contains(&orphan.menu_item_id.to_string())));
        assert!(warnings.iter().any(|w| w.contains("2 active daily")));
    }

    #[test]
    fn clean_snapshot_has_no_warnings() {
        let user = Uuid::new_v4();
        let now = Utc::now();
        let item = MenuItem::new("Soup", 3.0, "Starters", now.date_naive());
        let budgets = vec![Budget::new(user, BudgetCadence::Weekly, 70.0, now)];
        let purchase = Purchase::new(user, item.id, 3.0, 1, now);
        assert!(catalog_warnings(&budgets, &[item], &[purchase]).is_empty());
    }
}
