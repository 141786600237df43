//! Reference data source configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::REFERENCE_DATA_VERSION;
use crate::errors::ConfigError;
use crate::reference::ReferenceData;

/// Where the static reference tables come from.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReferenceConfig {
    /// Path to a reference data TOML file. Unset means built-in tables.
    pub data_path: Option<String>,
    /// Version the loaded file must declare. Default: built-in version.
    pub expected_version: Option<u32>,
}

impl ReferenceConfig {
    /// Returns the effective expected version, defaulting to
    /// [`REFERENCE_DATA_VERSION`].
    pub fn effective_expected_version(&self) -> u32 {
        self.expected_version.unwrap_or(REFERENCE_DATA_VERSION)
    }

    /// Resolve the reference data: load `data_path` if set, otherwise the
    /// built-in tables.
    pub fn resolve(&self) -> Result<ReferenceData, ConfigError> {
        match &self.data_path {
            Some(path) => {
                ReferenceData::load(Path::new(path), self.effective_expected_version())
            }
            None => {
                tracing::debug!("using built-in reference data");
                Ok(ReferenceData::builtin())
            }
        }
    }
}
