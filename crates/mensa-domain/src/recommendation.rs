//! Domain model for the daily meal recommendation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A daily menu recommendation for one user.
///
/// At most one exists per `(user_id, date)`; the store enforces the
/// uniqueness and the record is never updated once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub menu_item_ids: Vec<Uuid>,
    pub total_estimated_cost: f64,
    pub reason: String,
}

impl Recommendation {
    pub fn new(
        user_id: Uuid,
        date: NaiveDate,
        menu_item_ids: Vec<Uuid>,
        total_estimated_cost: f64,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            date,
            menu_item_ids,
            total_estimated_cost,
            reason: reason.into(),
        }
    }
}

impl Identifiable for Recommendation {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Recommendation {
    fn display_label(&self) -> String {
        format!(
            "{} items for {} (${})",
            self.menu_item_ids.len(),
            self.date,
            self.total_estimated_cost
        )
    }
}
