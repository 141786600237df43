//! Habit level validation errors.

use super::error_code::{self, AtlasErrorCode};

/// A raw habit level that is not an integer in `0..=3`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LevelError {
    #[error("level {value} is outside the range 0..=3")]
    OutOfRange { value: i64 },

    #[error("level {value} is not an integer")]
    NotInteger { value: f64 },
}

impl AtlasErrorCode for LevelError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_LEVEL
    }
}
