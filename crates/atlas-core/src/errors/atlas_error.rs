use super::error_code::{self, AtlasErrorCode};
use super::{ConfigError, LevelError};

/// Top-level error for engine and store operations.
#[derive(Debug, thiserror::Error)]
pub enum AtlasError {
    #[error("invalid level for habit '{habit}': {source}")]
    InvalidLevel {
        habit: String,
        #[source]
        source: LevelError,
    },

    #[error("unknown habit: {id}")]
    UnknownHabit { id: String },

    #[error("unknown organ: {id}")]
    UnknownOrgan { id: String },

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl AtlasErrorCode for AtlasError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidLevel { source, .. } => source.error_code(),
            Self::UnknownHabit { .. } => error_code::UNKNOWN_HABIT,
            Self::UnknownOrgan { .. } => error_code::UNKNOWN_ORGAN,
            Self::Config(e) => e.error_code(),
        }
    }
}

pub type AtlasResult<T> = Result<T, AtlasError>;
