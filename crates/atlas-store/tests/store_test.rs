//! Store writes, comparison snapshots and organ focus.

use atlas_core::errors::{AtlasError, AtlasErrorCode, LevelError};
use atlas_core::habit::{ids, organs};
use atlas_core::{HabitSelection, Level};
use atlas_engine::HealthEngine;
use atlas_store::{AtlasStore, CompareMode, Trend};

#[test]
fn set_habit_level_recomputes_metrics() {
    let mut store = AtlasStore::default();
    store.set_habit_level(ids::SMOKING, 3).unwrap();
    assert_eq!(store.selection().level(ids::SMOKING), Level::THREE);
    assert_eq!(store.metrics().life_expectancy, 42.0);
    assert_eq!(
        store.metrics(),
        &HealthEngine::builtin().compute_health(store.selection())
    );
}

#[test]
fn invalid_levels_leave_state_untouched() {
    let mut store = AtlasStore::default();
    store.set_habit_level(ids::EXERCISE, 2).unwrap();
    let selection = store.selection().clone();
    let metrics = store.metrics().clone();

    let err = store.set_habit_level(ids::EXERCISE, 4).unwrap_err();
    assert!(matches!(
        err,
        AtlasError::InvalidLevel { source: LevelError::OutOfRange { value: 4 }, .. }
    ));
    assert_eq!(err.error_code(), "INVALID_LEVEL");

    let err = store.set_habit_level_f64(ids::EXERCISE, 1.5).unwrap_err();
    assert!(matches!(
        err,
        AtlasError::InvalidLevel { source: LevelError::NotInteger { .. }, .. }
    ));
    assert!(store.set_habit_level(ids::EXERCISE, -1).is_err());
    assert!(store.set_habit_level_f64(ids::EXERCISE, f64::NAN).is_err());

    assert_eq!(store.selection(), &selection);
    assert_eq!(store.metrics(), &metrics);
}

#[test]
fn float_entry_point_accepts_whole_numbers() {
    let mut store = AtlasStore::default();
    store.set_habit_level_f64(ids::MEDITATION, 2.0).unwrap();
    assert_eq!(store.selection().level(ids::MEDITATION), Level::TWO);
}

#[test]
fn unknown_habit_is_rejected_by_store() {
    let mut store = AtlasStore::default();
    let err = store.set_habit_level("base_jumping", 1).unwrap_err();
    assert!(matches!(err, AtlasError::UnknownHabit { .. }));
    assert!(store.selection().is_empty());
}

#[test]
fn comparison_round_trip() {
    let mut store = AtlasStore::default();
    store.set_habit_level(ids::SMOKING, 2).unwrap();
    let s1 = store.selection().clone();
    let m1 = store.metrics().clone();

    store.set_compare_mode(CompareMode::Before);
    assert!(store.snapshot().is_some());

    store.set_habit_level(ids::SMOKING, 0).unwrap();
    store.set_habit_level(ids::EXERCISE, 3).unwrap();
    let s2 = store.selection().clone();
    let m2 = store.metrics().clone();
    assert_ne!(s1, s2);

    store.set_compare_mode(CompareMode::Before);
    let shown = store.current_display_data();
    assert_eq!(shown.selection, &s1);
    assert_eq!(shown.metrics, &m1);

    store.set_compare_mode(CompareMode::After);
    let shown = store.current_display_data();
    assert_eq!(shown.selection, &s2);
    assert_eq!(shown.metrics, &m2);

    store.set_compare_mode(CompareMode::Off);
    assert!(store.snapshot().is_none());
    let shown = store.current_display_data();
    assert_eq!(shown.selection, &s2);
    assert_eq!(shown.metrics, &m2);
}

#[test]
fn switching_halves_does_not_recapture() {
    let mut store = AtlasStore::default();
    store.set_compare_mode(CompareMode::After);
    let captured_at = store.snapshot().unwrap().captured_at;

    store.set_habit_level(ids::HYDRATION, 3).unwrap();
    store.set_compare_mode(CompareMode::Before);
    store.set_compare_mode(CompareMode::After);

    let snapshot = store.snapshot().unwrap();
    assert_eq!(snapshot.captured_at, captured_at);
    assert!(snapshot.before_selection.is_empty());
    assert_eq!(snapshot.after_selection.level(ids::HYDRATION), Level::THREE);
    assert_eq!(&snapshot.after_metrics, store.metrics());
}

#[test]
fn comparison_delta_reports_trend() {
    let mut store = AtlasStore::default();
    assert!(store.comparison_delta().is_none());

    store.set_compare_mode(CompareMode::After);
    assert_eq!(store.comparison_delta().unwrap().trend, Trend::Unchanged);

    store.set_habit_level(ids::SLEEP_CONSISTENCY, 3).unwrap();
    let delta = store.comparison_delta().unwrap();
    assert_eq!(delta.trend, Trend::Improved);
    assert_eq!(delta.change, 20.0);

    store.set_compare_mode(CompareMode::Before);
    assert_eq!(store.comparison_delta().unwrap().trend, Trend::Unchanged);

    store.set_compare_mode(CompareMode::After);
    store.set_habit_level(ids::SLEEP_CONSISTENCY, 0).unwrap();
    store.set_habit_level(ids::ALCOHOL, 3).unwrap();
    assert_eq!(store.comparison_delta().unwrap().trend, Trend::Declined);
}

#[test]
fn focus_organ_validates_id() {
    let mut store = AtlasStore::with_selection(
        HealthEngine::builtin(),
        HabitSelection::new().with(ids::SMOKING, Level::THREE),
    );
    assert!(store.focused_organ_assessment().is_none());

    let err = store.focus_organ(Some("spleen")).unwrap_err();
    assert!(matches!(err, AtlasError::UnknownOrgan { .. }));
    assert!(store.focused_organ().is_none());

    store.focus_organ(Some(organs::LUNGS)).unwrap();
    let lungs = store.focused_organ_assessment().unwrap().unwrap();
    assert_eq!(lungs.organ.as_str(), organs::LUNGS);
    assert!(lungs.health < 78.0);

    store.focus_organ(None).unwrap();
    assert!(store.focused_organ().is_none());
}

#[test]
fn snapshot_serializes_for_external_persistence() {
    let mut store = AtlasStore::default();
    store.set_habit_level(ids::READING, 1).unwrap();
    store.set_compare_mode(CompareMode::Before);

    let json = serde_json::to_value(store.snapshot().unwrap()).unwrap();
    assert_eq!(json["before_selection"]["reading"], 1);
    assert!(json["captured_at"].is_string());
    assert_eq!(serde_json::to_value(store.compare_mode()).unwrap(), "before");
}
