//! Tracing setup: env filter handling and idempotent initialization.

use std::sync::Mutex;

use atlas_core::tracing::setup::{init_tracing, init_tracing_with_default, LOG_ENV_VAR};
use atlas_core::AtlasConfig;

/// Serializes tests that touch `ATLAS_LOG`.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn init_tracing_is_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    tracing::info!("still logging after repeated init");
}

#[test]
fn per_crate_filter_is_accepted() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(LOG_ENV_VAR, "atlas_engine=debug,atlas_store=warn");
    init_tracing();
    std::env::remove_var(LOG_ENV_VAR);
}

#[test]
fn invalid_filter_falls_back_to_default() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var(LOG_ENV_VAR, "=this is not a filter=");
    init_tracing();
    std::env::remove_var(LOG_ENV_VAR);
}

#[test]
fn configured_filter_can_seed_initialization() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    let config = AtlasConfig::default();
    let filter = config.observability.effective_log_filter();
    init_tracing_with_default(filter);
    init_tracing_with_default(filter);
}
