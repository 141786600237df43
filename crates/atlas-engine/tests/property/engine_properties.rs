use atlas_core::constants::MAX_RECOMMENDATIONS;
use atlas_core::habit::ids;
use atlas_core::{HabitSelection, Level, Metric, ReferenceData};
use atlas_engine::{HealthEngine, MechanismProjector, OrganHealthProvider};
use proptest::prelude::*;

fn arb_level() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::ZERO),
        Just(Level::ONE),
        Just(Level::TWO),
        Just(Level::THREE),
    ]
}

/// A level for every catalogue habit.
fn arb_selection() -> impl Strategy<Value = HabitSelection> {
    let ids: Vec<_> = ReferenceData::builtin()
        .habits
        .iter()
        .map(|h| h.id.clone())
        .collect();
    prop::collection::vec(arb_level(), ids.len())
        .prop_map(move |levels| -> HabitSelection { ids.iter().cloned().zip(levels).collect() })
}

proptest! {
    #[test]
    fn every_metric_stays_in_bounds(selection in arb_selection()) {
        let engine = HealthEngine::builtin();
        let m = engine.compute_health(&selection);
        for metric in Metric::ALL {
            let (lo, hi) = metric.bounds();
            let v = m.get(metric);
            prop_assert!(v >= lo && v <= hi, "{} = {} outside [{}, {}]", metric.as_str(), v, lo, hi);
        }
        for (organ, score) in &m.organ_health {
            prop_assert!((20.0..=100.0).contains(score), "{} = {}", organ, score);
        }
    }

    #[test]
    fn mechanism_scores_stay_in_bounds(selection in arb_selection()) {
        let reference = ReferenceData::builtin();
        let projector = MechanismProjector::new(&reference);
        for (_, score) in projector.project(&selection) {
            prop_assert!((10.0..=100.0).contains(&score));
        }
        let risk = projector.aggregate_disease_risk(&selection);
        prop_assert!((5.0..=85.0).contains(&risk));
        let body = projector.overall_body_health(&selection);
        prop_assert!((10.0..=100.0).contains(&body));
    }

    #[test]
    fn recommendations_never_exceed_cap(selection in arb_selection()) {
        let engine = HealthEngine::builtin();
        let m = engine.compute_health(&selection);
        prop_assert!(m.recommendations.len() <= MAX_RECOMMENDATIONS);
        let priorities: Vec<_> = m.recommendations.iter().map(|r| r.priority).collect();
        let mut sorted = priorities.clone();
        sorted.sort();
        prop_assert_eq!(priorities, sorted);
    }

    #[test]
    fn compute_is_deterministic(selection in arb_selection()) {
        let engine = HealthEngine::builtin();
        prop_assert_eq!(engine.compute_health(&selection), engine.compute_health(&selection));
    }

    #[test]
    fn raising_exercise_never_lowers_mental_health(selection in arb_selection()) {
        let engine = HealthEngine::builtin();
        let mut previous = f64::MIN;
        for level in Level::ALL {
            let s = selection.clone().with(ids::EXERCISE, level);
            let mental = engine.compute_health(&s).mental_health;
            prop_assert!(mental >= previous);
            previous = mental;
        }
    }

    #[test]
    fn factor_magnitudes_are_positive(selection in arb_selection()) {
        let engine = HealthEngine::builtin();
        let factors = engine.compute_health(&selection).exponential_factors;
        for f in factors.positive.iter().chain(factors.negative.iter()) {
            prop_assert!(f.magnitude > 0.0);
        }
    }
}
