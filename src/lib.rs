#![doc(test(attr(deny(warnings))))]

//! MENSA ties together the cafeteria spending core: budget resolution, the
//! daily menu recommendation, spending aggregation, and budget alerts over
//! a pluggable store.

pub mod api;
pub mod utils;

pub use mensa_config as config;
pub use mensa_core as core;
pub use mensa_domain as domain;
pub use mensa_storage_json as storage_json;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Mensa tracing initialized.");
    });
}
