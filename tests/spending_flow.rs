mod common;

use chrono::{DateTime, Duration, Utc};
use tempfile::tempdir;
use uuid::Uuid;

use common::{at, FixedClock};
use mensa::api::{record_purchase, spending_overview};
use mensa_config::Config;
use mensa_core::{CafeteriaStore, CoreError};
use mensa_domain::{Budget, BudgetCadence, MenuItem};
use mensa_storage_json::JsonCafeteriaStore;

fn seeded_item(
    store: &JsonCafeteriaStore,
    name: &str,
    price: f64,
    category: &str,
    now: DateTime<Utc>,
) -> MenuItem {
    let item = MenuItem::new(name, price, category, now.date_naive());
    store.put_menu_item(item.clone()).expect("seed item");
    item
}

fn buy(
    store: &JsonCafeteriaStore,
    user: Uuid,
    item: Uuid,
    quantity: u32,
    when: DateTime<Utc>,
) -> Result<mensa_domain::Purchase, CoreError> {
    record_purchase(store, user, item, quantity, &FixedClock(when))
}

#[test]
fn overview_aggregates_today_week_average_and_alert() {
    let dir = tempdir().expect("tempdir");
    let store = JsonCafeteriaStore::new(dir.path().join("data")).expect("store");
    let user = Uuid::new_v4();
    let now = at("2025-03-10T18:00:00Z");

    store
        .put_budget(Budget::new(user, BudgetCadence::Daily, 6.0, now))
        .expect("seed budget");

    let soup = seeded_item(&store, "Soup", 5.0, "Starters", now);
    let cake = seeded_item(&store, "Cake", 3.0, "Desserts", now);
    let stew = seeded_item(&store, "Stew", 10.0, "Mains", now);

    buy(&store, user, soup.id, 1, at("2025-03-10T09:00:00Z")).expect("buy soup");
    buy(&store, user, cake.id, 1, at("2025-03-10T13:00:00Z")).expect("buy cake");
    buy(&store, user, stew.id, 1, now - Duration::days(3)).expect("buy stew");

    let window = Config::default().analytics_window_days;
    let overview = spending_overview(&store, user, &FixedClock(now), window).expect("overview");

    assert_eq!(overview.summary.today, 8.0);
    assert_eq!(overview.summary.this_week, 18.0);
    assert_eq!(overview.summary.daily_average, 2.57);

    // $8 spent against a $6 daily limit: capped progress, over budget.
    assert_eq!(overview.alert.progress_percent, 100.0);
    assert!(overview.alert.is_over_budget);
    assert_eq!(overview.daily_limit.map(|limit| limit.per_day), Some(6.0));

    assert_eq!(overview.categories.len(), 3);
    assert_eq!(overview.categories[0].category, "Mains");
    assert_eq!(overview.categories[0].amount, 10.0);
    assert_eq!(overview.categories[1].category, "Starters");
    assert_eq!(overview.categories[2].category, "Desserts");
}

#[test]
fn analytics_window_reaches_beyond_the_summary_week() {
    let dir = tempdir().expect("tempdir");
    let store = JsonCafeteriaStore::new(dir.path().join("data")).expect("store");
    let user = Uuid::new_v4();
    let now = at("2025-03-31T12:00:00Z");

    let stew = seeded_item(&store, "Stew", 10.0, "Mains", now);
    buy(&store, user, stew.id, 1, now - Duration::days(20)).expect("old purchase");
    buy(&store, user, stew.id, 1, now - Duration::days(2)).expect("recent purchase");

    let overview = spending_overview(&store, user, &FixedClock(now), 30).expect("overview");

    // The 20-day-old purchase is outside the summary week but inside the
    // 30-day category window.
    assert_eq!(overview.summary.this_week, 10.0);
    assert_eq!(overview.categories[0].amount, 20.0);
    assert_eq!(overview.categories[0].count, 2);
}

#[test]
fn overview_without_budget_keeps_the_alert_inert() {
    let dir = tempdir().expect("tempdir");
    let store = JsonCafeteriaStore::new(dir.path().join("data")).expect("store");
    let user = Uuid::new_v4();
    let now = at("2025-03-10T18:00:00Z");

    let soup = seeded_item(&store, "Soup", 5.0, "Starters", now);
    buy(&store, user, soup.id, 1, now).expect("buy soup");

    let overview = spending_overview(&store, user, &FixedClock(now), 30).expect("overview");
    assert!(overview.daily_limit.is_none());
    assert_eq!(overview.alert.progress_percent, 0.0);
    assert!(!overview.alert.is_over_budget);
}

#[test]
fn purchase_validation_rejects_bad_input_at_the_boundary() {
    let dir = tempdir().expect("tempdir");
    let store = JsonCafeteriaStore::new(dir.path().join("data")).expect("store");
    let user = Uuid::new_v4();
    let now = at("2025-03-10T12:00:00Z");

    let soup = seeded_item(&store, "Soup", 5.0, "Starters", now);

    let err = buy(&store, user, soup.id, 0, now).expect_err("zero quantity");
    assert!(matches!(err, CoreError::Validation(_)));

    let missing = Uuid::new_v4();
    let err = buy(&store, user, missing, 1, now).expect_err("unknown item");
    assert!(matches!(err, CoreError::MenuItemNotFound(id) if id == missing));

    let mut retired = seeded_item(&store, "Retired", 4.0, "Mains", now);
    retired.is_available = false;
    store.put_menu_item(retired.clone()).expect("update item");
    let err = buy(&store, user, retired.id, 1, now).expect_err("unavailable item");
    assert!(matches!(err, CoreError::Validation(_)));
}

#[test]
fn purchase_amount_snapshots_the_menu_price() {
    let dir = tempdir().expect("tempdir");
    let store = JsonCafeteriaStore::new(dir.path().join("data")).expect("store");
    let user = Uuid::new_v4();
    let now = at("2025-03-10T12:00:00Z");

    let soup = seeded_item(&store, "Soup", 4.99, "Starters", now);
    let purchase = buy(&store, user, soup.id, 3, now).expect("buy soup");
    assert_eq!(purchase.amount, 14.97);

    // Raising the price later never rewrites the recorded amount.
    let mut pricier = soup.clone();
    pricier.price = 7.99;
    store.put_menu_item(pricier).expect("update price");
    let overview = spending_overview(&store, user, &FixedClock(now), 30).expect("overview");
    assert_eq!(overview.summary.today, 14.97);
}
