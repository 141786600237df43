//! Domain constants for the Atlas health impact engine.
//!
//! These numbers are the model's rules: scaling curves, multipliers, clamp
//! bounds, baselines and penalty weights. Reference data tables live in
//! [`crate::reference`]; everything here is shared by both.

use crate::habit::ids;

/// Atlas version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version of the built-in reference data tables.
/// Loaded reference files must declare this version unless configured otherwise.
pub const REFERENCE_DATA_VERSION: u32 = 3;

/// Highest selectable habit level.
pub const MAX_LEVEL: u8 = 3;

// ---- Level scaling ----

/// Metric scaling curve used when applying the effect model.
pub const METRIC_SCALING: [f64; 4] = [0.0, 0.30, 0.65, 1.00];

/// Organ scaling curve for harmful contributions (both organ models).
pub const ORGAN_HARMFUL_SCALING: [f64; 4] = [0.0, 0.30, 0.60, 1.00];

/// Organ scaling curve for beneficial contributions (mechanism model).
/// Tops out below 1.0 to model diminishing returns.
pub const ORGAN_BENEFICIAL_SCALING: [f64; 4] = [0.0, 0.40, 0.70, 0.90];

/// Vulnerability model: multiplier applied to `weight * scaling`.
pub const ORGAN_IMPACT_MULTIPLIER: f64 = 2.0;

/// Mechanism model: cap multiplier for harmful impacts.
pub const HARMFUL_IMPACT_CAP: f64 = 100.0;

/// Mechanism model: cap multiplier for beneficial impacts.
pub const BENEFICIAL_IMPACT_CAP: f64 = 60.0;

// ---- Metric baselines ----

/// Baseline for every 0-100 scalar metric.
pub const SCALAR_BASELINE: f64 = 50.0;

/// Baseline life expectancy in years.
pub const LIFE_EXPECTANCY_BASELINE: f64 = 75.0;

/// Baseline disease risk in percent.
pub const DISEASE_RISK_BASELINE: f64 = 25.0;

/// Baseline for each stat block entry.
pub const STAT_BASELINE: f64 = 5.0;

// ---- Clamp bounds ----

/// Life expectancy range in years.
pub const LIFE_EXPECTANCY_BOUNDS: (f64, f64) = (40.0, 95.0);

/// Disease risk range in percent.
pub const DISEASE_RISK_BOUNDS: (f64, f64) = (5.0, 80.0);

/// Stat block range.
pub const STAT_BOUNDS: (f64, f64) = (0.0, 10.0);

/// Range of every remaining scalar metric.
pub const SCALAR_BOUNDS: (f64, f64) = (10.0, 100.0);

/// Vulnerability model organ score range.
pub const VULNERABILITY_ORGAN_BOUNDS: (f64, f64) = (20.0, 100.0);

/// Mechanism model organ score range.
pub const MECHANISM_ORGAN_BOUNDS: (f64, f64) = (10.0, 100.0);

// ---- Life expectancy substance penalty (years per raw level) ----

pub const PENALTY_DRUGS: f64 = 8.0;
pub const PENALTY_ALCOHOL: f64 = 6.0;
pub const PENALTY_SMOKING: f64 = 7.0;
pub const PENALTY_PORNOGRAPHY: f64 = 3.0;

// ---- Composite derivation (points per raw level) ----

pub const HAPPINESS_SOCIAL_WEIGHT: f64 = 12.0;
pub const HAPPINESS_EXERCISE_WEIGHT: f64 = 8.0;
pub const HAPPINESS_STRESS_WEIGHT: f64 = 15.0;
pub const FITNESS_EXERCISE_WEIGHT: f64 = 15.0;
pub const FITNESS_SEDENTARY_WEIGHT: f64 = 12.0;

// ---- Stat derivation (stat points per raw level, added to STAT_BASELINE) ----

/// Signed `(habit, weight)` terms for one derived stat.
pub type StatTerms = &'static [(&'static str, f64)];

pub const CARDIO_STRAIN_TERMS: StatTerms =
    &[(ids::SMOKING, 1.5), (ids::SEDENTARY, 1.2), (ids::EXERCISE, -1.8)];
pub const INFLAMMATION_TERMS: StatTerms = &[
    (ids::PROCESSED_DIET, 1.4),
    (ids::CHRONIC_STRESS, 1.1),
    (ids::HEALTHY_DIET, -1.3),
];
pub const SLEEP_QUALITY_TERMS: StatTerms = &[
    (ids::SLEEP_CONSISTENCY, 1.6),
    (ids::CHRONIC_STRESS, -1.2),
    (ids::GAMING, -0.8),
];
pub const STRESS_LOAD_TERMS: StatTerms = &[
    (ids::CHRONIC_STRESS, 1.8),
    (ids::MEDITATION, -1.4),
    (ids::SOCIAL_CONNECTION, -0.6),
];
pub const RECOVERY_CAPACITY_TERMS: StatTerms =
    &[(ids::SLEEP_CONSISTENCY, 1.5), (ids::EXERCISE, 1.0), (ids::ALCOHOL, -1.2)];
pub const COGNITIVE_FUNCTION_TERMS: StatTerms =
    &[(ids::READING, 1.3), (ids::SLEEP_CONSISTENCY, 1.1), (ids::DRUGS, -2.0)];
pub const IMMUNE_SYSTEM_TERMS: StatTerms = &[
    (ids::HEALTHY_DIET, 1.2),
    (ids::SLEEP_CONSISTENCY, 1.0),
    (ids::CHRONIC_STRESS, -1.1),
];
pub const METABOLIC_HEALTH_TERMS: StatTerms = &[
    (ids::EXERCISE, 1.3),
    (ids::HEALTHY_DIET, 1.1),
    (ids::PROCESSED_DIET, -1.4),
];

// ---- Recommendations ----

/// Maximum number of prioritized recommendations.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Critical tier fires when a harmful habit is above this level.
pub const CRITICAL_TIER_MIN_LEVEL: u8 = 0;

/// High tier fires when a key beneficial habit is below this level.
pub const HIGH_TIER_TARGET_LEVEL: u8 = 2;

/// Moderate tier fires when a secondary beneficial habit is below this level.
pub const MODERATE_TIER_TARGET_LEVEL: u8 = 3;

// ---- Organ risk tiers (mechanism model) ----

pub const RISK_LOW_THRESHOLD: f64 = 80.0;
pub const RISK_MODERATE_THRESHOLD: f64 = 60.0;
pub const RISK_HIGH_THRESHOLD: f64 = 40.0;

/// Number of harmful habits cited in an organ explanation.
pub const EXPLANATION_MAX_HARMFUL: usize = 2;

// ---- Aggregate disease risk (mechanism model) ----

pub const AGGREGATE_RISK_BASELINE: f64 = 15.0;
pub const AGGREGATE_RISK_SCALE: f64 = 0.7;
pub const AGGREGATE_RISK_CEILING: f64 = 85.0;
pub const AGGREGATE_RISK_FLOOR: f64 = 5.0;
