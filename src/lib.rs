#![doc(test(attr(deny(warnings))))]

//! Charter Analytics derives trip lifecycle status, filters trip collections and builds the
//! weekly, monthly and revenue-by-category series behind a charter operator dashboard.

pub mod cli;
pub mod errors;
pub mod fixtures;
pub mod utils;

pub use charter_config as config;
pub use charter_core as services;
pub use charter_domain as domain;
pub use charter_storage_json as storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Charter Analytics tracing initialized.");
    });
}
