//! Domain models for administrator-curated menu items.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A cafeteria menu item offered on a specific calendar day.
///
/// Owned and mutated by administrators; immutable from the ordering side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub dietary_tags: BTreeSet<String>,
    pub available_date: NaiveDate,
    pub is_available: bool,
}

impl MenuItem {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        category: impl Into<String>,
        available_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            price,
            category: category.into(),
            dietary_tags: BTreeSet::new(),
            available_date,
            is_available: true,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.dietary_tags.insert(tag.into());
        self
    }

    /// Whether the item can be offered on the given day.
    pub fn offered_on(&self, date: NaiveDate) -> bool {
        self.is_available && self.available_date == date
    }
}

impl Identifiable for MenuItem {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for MenuItem {
    fn amount(&self) -> f64 {
        self.price
    }
}

impl Displayable for MenuItem {
    fn display_label(&self) -> String {
        format!("{} (${})", self.name, self.price)
    }
}
