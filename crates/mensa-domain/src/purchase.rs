//! Domain models for recorded purchases.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;
use crate::money::round_currency;

/// An append-only record of a menu-item purchase.
///
/// `amount` snapshots `price × quantity` at purchase time so later menu
/// edits never rewrite history. Never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Purchase {
    pub id: Uuid,
    pub user_id: Uuid,
    pub menu_item_id: Uuid,
    pub amount: f64,
    pub quantity: u32,
    pub purchased_at: DateTime<Utc>,
}

impl Purchase {
    pub fn new(
        user_id: Uuid,
        menu_item_id: Uuid,
        unit_price: f64,
        quantity: u32,
        purchased_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            menu_item_id,
            amount: round_currency(unit_price * quantity as f64),
            quantity,
            purchased_at,
        }
    }
}

impl Identifiable for Purchase {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Amounted for Purchase {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Displayable for Purchase {
    fn display_label(&self) -> String {
        format!("purchase:{} (${})", self.id, self.amount)
    }
}
