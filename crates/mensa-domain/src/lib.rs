//! mensa-domain
//!
//! Pure domain models (Budget, MenuItem, Purchase, Recommendation, derived
//! summaries) plus money and calendar primitives.
//! No I/O, no storage. Only data types and core enums.

pub mod budget;
pub mod common;
pub mod menu;
pub mod money;
pub mod purchase;
pub mod recommendation;
pub mod summary;

pub use budget::*;
pub use common::*;
pub use menu::*;
pub use money::*;
pub use purchase::*;
pub use recommendation::*;
pub use summary::*;
