//! mensa-core
//!
//! Business logic and services for MENSA: budget resolution, the daily
//! recommendation, spending aggregation, and budget alerts.
//! Depends on mensa-domain. No CLI, no terminal I/O, no direct storage
//! interactions beyond the [`store::CafeteriaStore`] abstraction.

pub mod alert_service;
pub mod budget_service;
pub mod error;
pub mod recommendation_service;
pub mod spending_service;
pub mod store;
pub mod time;

pub use alert_service::*;
pub use budget_service::*;
pub use error::CoreError;
pub use recommendation_service::*;
pub use spending_service::*;
pub use store::*;
pub use time::*;
