use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A recommendation is already stored for the user and day. Recoverable:
    /// re-read and return the stored record.
    #[error("Recommendation already exists for user {user_id} on {date}")]
    RecommendationExists { user_id: Uuid, date: NaiveDate },
    #[error("Menu item not found: {0}")]
    MenuItemNotFound(Uuid),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
}

impl CoreError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, CoreError::RecommendationExists { .. })
    }
}
