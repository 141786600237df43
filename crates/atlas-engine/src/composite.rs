//! Metrics derived from other metrics after clamping.

use atlas_core::constants::{
    StatTerms, CARDIO_STRAIN_TERMS, COGNITIVE_FUNCTION_TERMS, FITNESS_EXERCISE_WEIGHT,
    FITNESS_SEDENTARY_WEIGHT, HAPPINESS_EXERCISE_WEIGHT, HAPPINESS_SOCIAL_WEIGHT,
    HAPPINESS_STRESS_WEIGHT, IMMUNE_SYSTEM_TERMS, INFLAMMATION_TERMS, METABOLIC_HEALTH_TERMS,
    RECOVERY_CAPACITY_TERMS, SCALAR_BASELINE, SLEEP_QUALITY_TERMS, STAT_BASELINE,
    STRESS_LOAD_TERMS,
};
use atlas_core::habit::ids;
use atlas_core::models::StatBlock;
use atlas_core::{HabitSelection, Metric};

use crate::aggregator::MetricAccumulator;

/// `50 + social*12 + exercise*8 − stress*15`, clamped. Raw levels.
pub fn happiness(selection: &HabitSelection) -> f64 {
    let value = SCALAR_BASELINE
        + selection.level(ids::SOCIAL_CONNECTION).as_f64() * HAPPINESS_SOCIAL_WEIGHT
        + selection.level(ids::EXERCISE).as_f64() * HAPPINESS_EXERCISE_WEIGHT
        - selection.level(ids::CHRONIC_STRESS).as_f64() * HAPPINESS_STRESS_WEIGHT;
    Metric::Happiness.clamp(value)
}

/// `50 + exercise*15 − sedentary*12`, clamped. Raw levels.
pub fn physical_fitness(selection: &HabitSelection) -> f64 {
    let value = SCALAR_BASELINE
        + selection.level(ids::EXERCISE).as_f64() * FITNESS_EXERCISE_WEIGHT
        - selection.level(ids::SEDENTARY).as_f64() * FITNESS_SEDENTARY_WEIGHT;
    Metric::PhysicalFitness.clamp(value)
}

const STAT_FORMULAS: [(Metric, StatTerms); 8] = [
    (Metric::CardioStrain, CARDIO_STRAIN_TERMS),
    (Metric::Inflammation, INFLAMMATION_TERMS),
    (Metric::SleepQuality, SLEEP_QUALITY_TERMS),
    (Metric::StressLoad, STRESS_LOAD_TERMS),
    (Metric::RecoveryCapacity, RECOVERY_CAPACITY_TERMS),
    (Metric::CognitiveFunction, COGNITIVE_FUNCTION_TERMS),
    (Metric::ImmuneSystem, IMMUNE_SYSTEM_TERMS),
    (Metric::MetabolicHealth, METABOLIC_HEALTH_TERMS),
];

/// `5 + Σ level*weight` over the stat's terms, clamped to `[0, 10]`. Raw levels.
pub fn stat(metric: Metric, terms: StatTerms, selection: &HabitSelection) -> f64 {
    let value = terms
        .iter()
        .fold(STAT_BASELINE, |acc, (habit, weight)| {
            acc + selection.level(habit).as_f64() * weight
        });
    metric.clamp(value)
}

/// All eight stats derived from raw levels.
pub fn stat_block(selection: &HabitSelection) -> StatBlock {
    let mut acc = MetricAccumulator::baseline();
    write_stats(&mut acc, selection);
    acc.stat_block()
}

fn write_stats(acc: &mut MetricAccumulator, selection: &HabitSelection) {
    for (metric, terms) in STAT_FORMULAS {
        acc.set(metric, stat(metric, terms, selection));
    }
}

fn mean3(a: f64, b: f64, c: f64) -> f64 {
    (a + b + c) / 3.0
}

/// Overwrite the four composite metrics and the stat block on an already
/// clamped accumulator. The two means use the derived happiness and fitness.
pub fn derive(acc: &mut MetricAccumulator, selection: &HabitSelection) {
    let happiness = happiness(selection);
    let fitness = physical_fitness(selection);
    let overall = acc.get(Metric::OverallHealth);
    let mental = acc.get(Metric::MentalHealth);

    acc.set(Metric::Happiness, happiness);
    acc.set(Metric::PhysicalFitness, fitness);
    acc.set(
        Metric::QualityOfLife,
        Metric::QualityOfLife.clamp(mean3(overall, happiness, mental)),
    );
    acc.set(
        Metric::OverallWellness,
        Metric::OverallWellness.clamp(mean3(overall, happiness, fitness)),
    );
    write_stats(acc, selection);
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_core::Level;

    #[test]
    fn heavy_stress_floors_happiness() {
        let selection = HabitSelection::new().with(ids::CHRONIC_STRESS, Level::THREE);
        assert_eq!(happiness(&selection), 10.0);
    }

    #[test]
    fn fitness_formula() {
        let selection = HabitSelection::new()
            .with(ids::EXERCISE, Level::TWO)
            .with(ids::SEDENTARY, Level::ONE);
        assert_eq!(physical_fitness(&selection), 50.0 + 30.0 - 12.0);
    }

    #[test]
    fn means_use_derived_values() {
        let selection = HabitSelection::new().with(ids::SOCIAL_CONNECTION, Level::THREE);
        let mut acc = MetricAccumulator::baseline();
        derive(&mut acc, &selection);
        assert_eq!(acc.get(Metric::Happiness), 86.0);
        assert_eq!(acc.get(Metric::QualityOfLife), (50.0 + 86.0 + 50.0) / 3.0);
        assert_eq!(acc.get(Metric::OverallWellness), (50.0 + 86.0 + 50.0) / 3.0);
    }

    #[test]
    fn stats_overwrite_accumulated_values() {
        let mut acc = MetricAccumulator::baseline();
        acc.set(Metric::RecoveryCapacity, 10.0);
        derive(&mut acc, &HabitSelection::new());
        assert_eq!(acc.stat_block().values(), [5.0; 8]);
    }

    #[test]
    fn stat_block_uses_raw_levels() {
        let selection = HabitSelection::new()
            .with(ids::SLEEP_CONSISTENCY, Level::ONE)
            .with(ids::ALCOHOL, Level::ONE);
        let stats = stat_block(&selection);
        assert!((stats.recovery_capacity - 5.3).abs() < 1e-9);
        assert_eq!(stats.cardio_strain, 5.0);
    }
}
