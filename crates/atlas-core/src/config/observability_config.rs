//! Logging configuration.

use serde::{Deserialize, Serialize};

use crate::tracing::setup::DEFAULT_FILTER;

/// Configuration for tracing output.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives used when `ATLAS_LOG` is unset.
    pub log_filter: Option<String>,
}

impl ObservabilityConfig {
    /// Returns the effective log filter, defaulting to `atlas=info`.
    pub fn effective_log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_FILTER)
    }
}
