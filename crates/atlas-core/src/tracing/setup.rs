//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "ATLAS_LOG";

/// Filter used when `ATLAS_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "atlas=info";

/// Initialize the Atlas tracing/logging system.
///
/// Reads `ATLAS_LOG` for per-subsystem log levels, e.g.
/// `ATLAS_LOG=atlas_engine=debug,atlas_store=info`.
/// Falls back to `atlas=info`.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    init_tracing_with_default(DEFAULT_FILTER);
}

/// Like [`init_tracing`], with a caller-supplied fallback filter
/// (typically `ObservabilityConfig::effective_log_filter`).
pub fn init_tracing_with_default(default_filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
