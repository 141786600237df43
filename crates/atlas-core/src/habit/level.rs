use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::MAX_LEVEL;
use crate::errors::LevelError;

/// Ordinal habit engagement: 0 = absent, 1 = light, 2 = moderate, 3 = heavy.
///
/// Only constructible through checked conversions, so every `Level` in the
/// system is an integer in `0..=3`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(try_from = "i64", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const ZERO: Level = Level(0);
    pub const ONE: Level = Level(1);
    pub const TWO: Level = Level(2);
    pub const THREE: Level = Level(3);

    /// All levels in ascending order.
    pub const ALL: [Level; 4] = [Self::ZERO, Self::ONE, Self::TWO, Self::THREE];

    /// Create a level, rejecting values above 3.
    pub fn new(value: u8) -> Result<Self, LevelError> {
        if value > MAX_LEVEL {
            return Err(LevelError::OutOfRange {
                value: i64::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Raw level value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Index into a four-entry scaling curve.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Raw level as a float, for formulas that weight raw levels.
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// True for any level above zero.
    pub fn is_active(self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Level {
    type Error = LevelError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(v) if v <= MAX_LEVEL => Ok(Self(v)),
            _ => Err(LevelError::OutOfRange { value }),
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = LevelError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<f64> for Level {
    type Error = LevelError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(LevelError::NotInteger { value });
        }
        if !(0.0..=f64::from(MAX_LEVEL)).contains(&value) {
            return Err(LevelError::OutOfRange {
                value: value as i64,
            });
        }
        Ok(Self(value as u8))
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}
