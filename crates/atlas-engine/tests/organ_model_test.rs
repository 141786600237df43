//! Mechanism organ model: risk tiers, explanations and body-level aggregates.

use atlas_core::habit::{ids, organs};
use atlas_core::models::RiskTier;
use atlas_core::{AtlasError, AtlasResult, HabitKind, HabitSelection, Level, OrganId};
use atlas_engine::{HealthEngine, MechanismProjector, OrganHealthProvider};

#[test]
fn untouched_heart_sits_in_moderate_tier() {
    let engine = HealthEngine::builtin();
    let heart = engine
        .assess_organ(organs::HEART, &HabitSelection::new())
        .unwrap();
    assert_eq!(heart.health, 75.0);
    assert_eq!(heart.risk, RiskTier::Moderate);
    assert!(heart.affecting_habits.is_empty());
    assert_eq!(
        heart.explanation,
        "Your heart health shows some signs of stress. Current state: 75% health."
    );
}

#[test]
fn heavy_smoking_puts_lungs_at_high_risk() {
    let engine = HealthEngine::builtin();
    let selection = HabitSelection::new().with(ids::SMOKING, Level::THREE);
    let lungs = engine.assess_organ(organs::LUNGS, &selection).unwrap();

    assert!((lungs.health - 43.0).abs() < 1e-9);
    assert_eq!(lungs.risk, RiskTier::High);
    assert_eq!(lungs.affecting_habits.len(), 1);
    let smoking = &lungs.affecting_habits[0];
    assert_eq!(smoking.kind, HabitKind::Harmful);
    assert_eq!(smoking.level, Level::THREE);
    assert!(smoking.impact < 0.0);
    assert_eq!(
        lungs.explanation,
        "Your lungs health is worrying, mainly due to smoking. Current state: 43% health. \
         Consulting a health professional is recommended."
    );
}

#[test]
fn explanation_mentions_recovery_habit() {
    let engine = HealthEngine::builtin();
    let selection = HabitSelection::new()
        .with(ids::SMOKING, Level::THREE)
        .with(ids::EXERCISE, Level::THREE);
    let lungs = engine.assess_organ(organs::LUNGS, &selection).unwrap();
    // 78 - 35 + 10.8
    assert!((lungs.health - 53.8).abs() < 1e-9);
    assert!(lungs
        .explanation
        .contains("Fortunately, your exercise is helping recovery. Current state: 54% health."));
    assert_eq!(lungs.harmful().count(), 1);
    assert_eq!(lungs.beneficial().count(), 1);
}

#[test]
fn beneficial_only_reads_as_benefiting() {
    let engine = HealthEngine::builtin();
    let selection = HabitSelection::new().with(ids::EXERCISE, Level::THREE);
    let heart = engine.assess_organ(organs::HEART, &selection).unwrap();
    // 75 + 0.30 * 0.90 * 60
    assert!((heart.health - 91.2).abs() < 1e-9);
    assert_eq!(heart.risk, RiskTier::Low);
    assert_eq!(
        heart.explanation,
        "Your heart health is excellent, benefiting from your exercise. Current state: 91% health."
    );
}

#[test]
fn explanation_cites_at_most_two_harmful_habits() {
    let engine = HealthEngine::builtin();
    let selection = HabitSelection::new()
        .with(ids::DRUGS, Level::ONE)
        .with(ids::CHRONIC_STRESS, Level::ONE)
        .with(ids::ALCOHOL, Level::ONE);
    let brain = engine.assess_organ(organs::BRAIN, &selection).unwrap();
    assert_eq!(brain.affecting_habits.len(), 3);
    assert!(brain
        .explanation
        .contains("mainly due to recreational drugs and chronic stress."));
    assert!(!brain.explanation.contains("alcohol"));
}

#[test]
fn critical_tier_at_floor() {
    let engine = HealthEngine::builtin();
    let selection = HabitSelection::new()
        .with(ids::ALCOHOL, Level::THREE)
        .with(ids::PROCESSED_DIET, Level::THREE)
        .with(ids::DRUGS, Level::THREE);
    let liver = engine.assess_organ(organs::LIVER, &selection).unwrap();
    assert_eq!(liver.health, 10.0);
    assert_eq!(liver.risk, RiskTier::Critical);
    assert!(liver.explanation.contains("critical"));
    assert!(liver.explanation.ends_with("Consulting a health professional is recommended."));
}

#[test]
fn body_level_aggregates_at_baseline() {
    let engine = HealthEngine::builtin();
    let selection = HabitSelection::new();

    // Bladder carries no body weight.
    let expected_body = (78.0 * 0.18
        + 75.0 * 0.20
        + 80.0 * 0.22
        + 76.0 * 0.16
        + 82.0 * 0.12
        + 72.0 * 0.14
        + 77.0 * 0.08)
        / 1.10;
    assert!((engine.overall_body_health(&selection) - expected_body).abs() < 1e-6);

    // Mean organ risk 22.5 over all eight organs.
    assert!((engine.aggregate_disease_risk(&selection) - 30.75).abs() < 1e-9);
}

#[test]
fn aggregate_disease_risk_is_capped() {
    let engine = HealthEngine::builtin();
    let everything_bad: HabitSelection = engine
        .reference()
        .habits
        .iter()
        .filter(|h| h.kind == HabitKind::Harmful)
        .map(|h| (h.id.clone(), Level::THREE))
        .collect();
    let risk = engine.aggregate_disease_risk(&everything_bad);
    assert!(risk <= 85.0);
    assert!(risk > 30.75);
}

#[test]
fn models_keep_separate_bounds() {
    let engine = HealthEngine::builtin();
    let mechanism = MechanismProjector::new(engine.reference());
    assert_eq!(mechanism.bounds(), (10.0, 100.0));
    let map = mechanism.project(&HabitSelection::new());
    assert_eq!(map.len(), 8);
    assert_eq!(map[organs::BLADDER], 80.0);
}

struct PartialProvider {
    organs: Vec<OrganId>,
}

impl OrganHealthProvider for PartialProvider {
    fn organ_ids(&self) -> Vec<&OrganId> {
        self.organs.iter().collect()
    }

    fn bounds(&self) -> (f64, f64) {
        (0.0, 100.0)
    }

    fn score(&self, organ: &str, _selection: &HabitSelection) -> AtlasResult<f64> {
        if organ == organs::HEART {
            Ok(60.0)
        } else {
            Err(AtlasError::UnknownOrgan { id: organ.to_string() })
        }
    }
}

#[test]
fn project_skips_organs_that_fail_to_score() {
    let provider = PartialProvider {
        organs: vec![OrganId::new(organs::HEART), OrganId::new("appendix")],
    };
    let map = provider.project(&HabitSelection::new());
    assert_eq!(map.len(), 1);
    assert_eq!(map[organs::HEART], 60.0);
}
