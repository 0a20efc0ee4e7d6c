#![doc(test(attr(deny(warnings))))]

//! Painel Core offers the record models, period filtering, and aggregation
//! primitives that power a multi-company financial dashboard.

pub mod config;
pub mod core;
pub mod currency;
pub mod dashboard;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Painel Core tracing initialized.");
    });
}
