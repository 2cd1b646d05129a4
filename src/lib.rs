#![doc(test(attr(deny(warnings))))]

//! Depot Core holds the record stores, credential vault, and JSON persistence
//! that power the interactive depot management CLI.

pub mod auth;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod store;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Depot Core tracing initialized.");
    });
}
