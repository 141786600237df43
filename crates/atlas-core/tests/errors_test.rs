//! Error codes, messages and level validation.

use atlas_core::errors::{AtlasError, AtlasErrorCode, ConfigError, LevelError};
use atlas_core::{HabitSelection, Level};
use proptest::prelude::*;

#[test]
fn error_codes_are_stable() {
    let invalid = AtlasError::InvalidLevel {
        habit: "smoking".to_string(),
        source: LevelError::OutOfRange { value: 4 },
    };
    assert_eq!(invalid.error_code(), "INVALID_LEVEL");
    assert_eq!(
        AtlasError::UnknownHabit { id: "x".into() }.error_code(),
        "UNKNOWN_HABIT"
    );
    assert_eq!(
        AtlasError::UnknownOrgan { id: "spleen".into() }.error_code(),
        "UNKNOWN_ORGAN"
    );
    let config: AtlasError = ConfigError::VersionMismatch {
        expected: 3,
        actual: 1,
    }
    .into();
    assert_eq!(config.error_code(), "CONFIG_ERROR");
    let unknown_ref: AtlasError = ConfigError::UnknownHabitReference {
        table: "effects".into(),
        habit: "vaping".into(),
    }
    .into();
    assert_eq!(unknown_ref.error_code(), "UNKNOWN_HABIT");
}

#[test]
fn boundary_string_prefixes_code() {
    let err = AtlasError::UnknownOrgan {
        id: "spleen".to_string(),
    };
    assert_eq!(err.boundary_string(), "[UNKNOWN_ORGAN] unknown organ: spleen");
}

#[test]
fn invalid_level_keeps_source() {
    use std::error::Error;

    let err = HabitSelection::from_raw([("exercise", 7)]).unwrap_err();
    assert!(matches!(err, AtlasError::InvalidLevel { ref habit, .. } if habit == "exercise"));
    let source = err.source().unwrap();
    assert_eq!(source.to_string(), "level 7 is outside the range 0..=3");
}

#[test]
fn fractional_level_is_not_an_integer() {
    assert_eq!(
        Level::try_from(1.5),
        Err(LevelError::NotInteger { value: 1.5 })
    );
    assert_eq!(Level::try_from(2.0), Ok(Level::TWO));
}

proptest! {
    #[test]
    fn levels_outside_range_are_rejected(value in prop_oneof![i64::MIN..0i64, 4i64..i64::MAX]) {
        prop_assert_eq!(Level::try_from(value), Err(LevelError::OutOfRange { value }));
    }

    #[test]
    fn levels_in_range_round_trip(value in 0i64..=3) {
        let level = Level::try_from(value).unwrap();
        prop_assert_eq!(i64::from(level.value()), value);
    }
}
