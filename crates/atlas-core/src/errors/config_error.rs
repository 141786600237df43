//! Configuration and reference data errors.

use super::error_code::{self, AtlasErrorCode};

/// Errors that can occur while loading or validating configuration and
/// reference data tables.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("{table} references unknown habit '{habit}'")]
    UnknownHabitReference { table: String, habit: String },

    #[error("reference data version mismatch: expected {expected}, got {actual}")]
    VersionMismatch { expected: u32, actual: u32 },
}

impl AtlasErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownHabitReference { .. } => error_code::UNKNOWN_HABIT,
            _ => error_code::CONFIG_ERROR,
        }
    }
}
