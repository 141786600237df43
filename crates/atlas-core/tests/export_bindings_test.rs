//! Generates TypeScript bindings from Rust types via ts-rs.
//!
//! Run with: cargo test -p atlas-core export_bindings
//! Generated files appear in atlas-core/bindings/*.ts

fn assert_ts<T: ts_rs::TS>() {}

#[test]
fn export_bindings() {
    // Export is driven by #[ts(export)]; this only checks every boundary
    // type is importable and TS-derivable.
    use atlas_core::habit::{HabitId, HabitKind, Level, OrganId};
    use atlas_core::models::{
        AffectingHabit, ExponentialFactor, ExponentialFactors, MetricSet, OrganAssessment,
        Priority, Recommendation, RiskTier, StatBlock,
    };
    use atlas_core::Metric;

    assert_ts::<HabitId>();
    assert_ts::<OrganId>();
    assert_ts::<HabitKind>();
    assert_ts::<Level>();
    assert_ts::<Metric>();
    assert_ts::<StatBlock>();
    assert_ts::<MetricSet>();
    assert_ts::<ExponentialFactor>();
    assert_ts::<ExponentialFactors>();
    assert_ts::<Recommendation>();
    assert_ts::<Priority>();
    assert_ts::<RiskTier>();
    assert_ts::<AffectingHabit>();
    assert_ts::<OrganAssessment>();
}
