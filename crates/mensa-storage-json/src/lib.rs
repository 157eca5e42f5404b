//! mensa-storage-json
//!
//! Filesystem-backed JSON persistence implementing
//! [`mensa_core::CafeteriaStore`]. One file per collection under a data
//! root, written atomically via a temp file and rename.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use mensa_core::{CafeteriaStore, CoreError};
use mensa_domain::{Budget, MenuItem, Purchase, Recommendation};

const BUDGETS_FILE: &str = "budgets.json";
const MENU_FILE: &str = "menu_items.json";
const PURCHASES_FILE: &str = "purchases.json";
const RECOMMENDATIONS_FILE: &str = "recommendations.json";
const TMP_SUFFIX: &str = "tmp";

/// JSON store keeping each collection in its own file, preserving
/// insertion order.
///
/// Mutating operations serialize behind one lock so the recommendation
/// uniqueness check-and-insert stays atomic within the process.
pub struct JsonCafeteriaStore {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonCafeteriaStore {
    pub fn new(root: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            write_lock: Mutex::new(()),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn collection_path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    fn load<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, CoreError> {
        let path = self.collection_path(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&path)?;
        serde_json::from_str(&data).map_err(|err| CoreError::Serde(err.to_string()))
    }

    fn save<T: Serialize>(&self, file: &str, records: &[T]) -> Result<(), CoreError> {
        let path = self.collection_path(file);
        let json = serde_json::to_string_pretty(records)
            .map_err(|err| CoreError::Serde(err.to_string()))?;
        let tmp = tmp_path(&path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

impl CafeteriaStore for JsonCafeteriaStore {
    fn budgets_for(&self, user_id: Uuid) -> Result<Vec<Budget>, CoreError> {
        let budgets: Vec<Budget> = self.load(BUDGETS_FILE)?;
        Ok(budgets
            .into_iter()
            .filter(|budget| budget.user_id == user_id)
            .collect())
    }

    fn put_budget(&self, budget: Budget) -> Result<Budget, CoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut budgets: Vec<Budget> = self.load(BUDGETS_FILE)?;
        if budget.is_active {
            for stored in budgets.iter_mut() {
                if stored.user_id == budget.user_id
                    && stored.cadence == budget.cadence
                    && stored.id != budget.id
                {
                    stored.deactivate();
                }
            }
        }
        match budgets.iter_mut().find(|stored| stored.id == budget.id) {
            Some(stored) => *stored = budget.clone(),
            None => budgets.push(budget.clone()),
        }
        self.save(BUDGETS_FILE, &budgets)?;
        Ok(budget)
    }

    fn available_menu_items(&self, date: NaiveDate) -> Result<Vec<MenuItem>, CoreError> {
        let items: Vec<MenuItem> = self.load(MENU_FILE)?;
        Ok(items.into_iter().filter(|item| item.offered_on(date)).collect())
    }

    fn put_menu_item(&self, item: MenuItem) -> Result<MenuItem, CoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut items: Vec<MenuItem> = self.load(MENU_FILE)?;
        match items.iter_mut().find(|stored| stored.id == item.id) {
            Some(stored) => *stored = item.clone(),
            None => items.push(item.clone()),
        }
        self.save(MENU_FILE, &items)?;
        Ok(item)
    }

    fn menu_item(&self, id: Uuid) -> Result<Option<MenuItem>, CoreError> {
        let items: Vec<MenuItem> = self.load(MENU_FILE)?;
        Ok(items.into_iter().find(|item| item.id == id))
    }

    fn recommendation_for(
        &self,
        user_id: Uuid,
        date: NaiveDate,
    ) -> Result<Option<Recommendation>, CoreError> {
        let recs: Vec<Recommendation> = self.load(RECOMMENDATIONS_FILE)?;
        Ok(recs
            .into_iter()
            .find(|rec| rec.user_id == user_id && rec.date == date))
    }

    fn create_recommendation(&self, rec: Recommendation) -> Result<Recommendation, CoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut recs: Vec<Recommendation> = self.load(RECOMMENDATIONS_FILE)?;
        if recs
            .iter()
            .any(|stored| stored.user_id == rec.user_id && stored.date == rec.date)
        {
            return Err(CoreError::RecommendationExists {
                user_id: rec.user_id,
                date: rec.date,
            });
        }
        recs.push(rec.clone());
        self.save(RECOMMENDATIONS_FILE, &recs)?;
        Ok(rec)
    }

    fn purchases_since(
        &self,
        user_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<Purchase>, CoreError> {
        let purchases: Vec<Purchase> = self.load(PURCHASES_FILE)?;
        let mut filtered: Vec<Purchase> = purchases
            .into_iter()
            .filter(|purchase| purchase.user_id == user_id && purchase.purchased_at >= since)
            .collect();
        filtered.sort_by_key(|purchase| purchase.purchased_at);
        Ok(filtered)
    }

    fn create_purchase(&self, purchase: Purchase) -> Result<Purchase, CoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut purchases: Vec<Purchase> = self.load(PURCHASES_FILE)?;
        purchases.push(purchase.clone());
        self.save(PURCHASES_FILE, &purchases)?;
        Ok(purchase)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
