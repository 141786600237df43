//! Top-level Atlas configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ObservabilityConfig, ReferenceConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ATLAS_*`)
/// 2. Project config (`atlas.toml` in the project root)
/// 3. User config (`~/.atlas/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AtlasConfig {
    pub reference: ReferenceConfig,
    pub observability: ObservabilityConfig,
}

impl AtlasConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                Self::merge_toml_file(&mut config, &user_config_path)?;
            }
        }

        let project_config_path = root.join("atlas.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.reference.data_path {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "reference.data_path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if self.reference.expected_version == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "reference.expected_version".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if let Some(filter) = &self.observability.log_filter {
            if filter.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "observability.log_filter".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the user config path: `~/.atlas/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".atlas").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    fn merge_toml_file(config: &mut AtlasConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let file_config: AtlasConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a `Some`.
    fn merge(base: &mut AtlasConfig, other: &AtlasConfig) {
        if other.reference.data_path.is_some() {
            base.reference.data_path = other.reference.data_path.clone();
        }
        if other.reference.expected_version.is_some() {
            base.reference.expected_version = other.reference.expected_version;
        }
        if other.observability.log_filter.is_some() {
            base.observability.log_filter = other.observability.log_filter.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `ATLAS_REFERENCE_PATH`, `ATLAS_REFERENCE_VERSION`, `ATLAS_LOG_FILTER`.
    fn apply_env_overrides(config: &mut AtlasConfig) {
        if let Ok(val) = std::env::var("ATLAS_REFERENCE_PATH") {
            config.reference.data_path = Some(val);
        }
        if let Ok(val) = std::env::var("ATLAS_REFERENCE_VERSION") {
            if let Ok(v) = val.parse::<u32>() {
                config.reference.expected_version = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ATLAS_LOG_FILTER") {
            config.observability.log_filter = Some(val);
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
