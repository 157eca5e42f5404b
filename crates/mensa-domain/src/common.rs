//! Shared traits, the budget cadence enum, and calendar windows.

use std::fmt;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exposes a stable identifier for stored entities.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Supplies a common contract for retrieving numeric amounts.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
/// Enumerates the cadences a spending budget can be defined over.
#[derive(Default)]
pub enum BudgetCadence {
    #[default]
    Daily,
    Weekly,
}

impl BudgetCadence {
    /// Returns the day-count the cadence amount is spread across.
    pub fn days(self) -> u32 {
        match self {
            BudgetCadence::Daily => 1,
            BudgetCadence::Weekly => 7,
        }
    }
}

impl fmt::Display for BudgetCadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetCadence::Daily => "daily",
            BudgetCadence::Weekly => "weekly",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// A calendar-day window, inclusive on both ends.
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateWindowError> {
        if end < start {
            return Err(DateWindowError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    /// Builds a trailing window of `days` calendar days ending at `reference`,
    /// including the (possibly partial) reference day itself.
    pub fn trailing(reference: NaiveDate, days: u32) -> Self {
        let span = days.max(1) as i64;
        Self {
            start: reference - Duration::days(span - 1),
            end: reference,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of calendar days covered by the window.
    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur when constructing [`DateWindow`] values.
pub enum DateWindowError {
    InvalidRange,
}

impl fmt::Display for DateWindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateWindowError::InvalidRange => f.write_str("date window end must not precede start"),
        }
    }
}

impl std::error::Error for DateWindowError {}
