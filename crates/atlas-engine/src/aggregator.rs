//! Metric aggregator: folds the effect model over a selection.
//!
//! Order of operations is fixed: baseline → effect fold (catalogue order) →
//! life expectancy substance penalty → clamp. Clamping is always last.

use atlas_core::constants::{
    PENALTY_ALCOHOL, PENALTY_DRUGS, PENALTY_PORNOGRAPHY, PENALTY_SMOKING,
};
use atlas_core::habit::ids;
use atlas_core::models::StatBlock;
use atlas_core::{HabitSelection, Metric, ReferenceData};
use tracing::debug;

use crate::scaling::ScalingCurve;

/// Running value for every metric, indexed by [`Metric::index`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricAccumulator {
    values: [f64; Metric::COUNT],
}

impl MetricAccumulator {
    /// Every metric at its baseline.
    pub fn baseline() -> Self {
        let mut values = [0.0; Metric::COUNT];
        for metric in Metric::ALL {
            values[metric.index()] = metric.baseline();
        }
        Self { values }
    }

    pub fn get(&self, metric: Metric) -> f64 {
        self.values[metric.index()]
    }

    pub fn set(&mut self, metric: Metric, value: f64) {
        self.values[metric.index()] = value;
    }

    pub fn add(&mut self, metric: Metric, delta: f64) {
        self.values[metric.index()] += delta;
    }

    /// Clamp every metric to its documented range.
    pub fn clamp_all(&mut self) {
        for metric in Metric::ALL {
            let i = metric.index();
            self.values[i] = metric.clamp(self.values[i]);
        }
    }

    pub fn stat_block(&self) -> StatBlock {
        StatBlock {
            cardio_strain: self.get(Metric::CardioStrain),
            inflammation: self.get(Metric::Inflammation),
            sleep_quality: self.get(Metric::SleepQuality),
            stress_load: self.get(Metric::StressLoad),
            recovery_capacity: self.get(Metric::RecoveryCapacity),
            cognitive_function: self.get(Metric::CognitiveFunction),
            immune_system: self.get(Metric::ImmuneSystem),
            metabolic_health: self.get(Metric::MetabolicHealth),
        }
    }
}

/// Run the full aggregation pass and return clamped metrics.
pub fn aggregate(reference: &ReferenceData, selection: &HabitSelection) -> MetricAccumulator {
    let mut acc = MetricAccumulator::baseline();

    for (id, _) in selection.iter() {
        if !reference.habits.contains(id.as_str()) {
            debug!(habit = %id, "skipping habit not in catalogue");
        }
    }

    for entry in reference.habits.iter() {
        let level = selection.level(entry.id.as_str());
        if !level.is_active() {
            continue;
        }
        let Some(profile) = reference.effects.get(&entry.id) else {
            continue;
        };
        let intensity = ScalingCurve::Metric.intensity(level);
        acc.add(profile.primary.metric, profile.primary.scaled(intensity));
        for effect in profile.supporting_effects() {
            acc.add(effect.metric, effect.scaled(intensity));
        }
    }

    acc.add(Metric::LifeExpectancy, -substance_penalty(selection));
    acc.clamp_all();
    acc
}

/// Years removed from life expectancy, weighted by raw levels. Applied on top
/// of the effect model's own life expectancy contributions.
pub fn substance_penalty(selection: &HabitSelection) -> f64 {
    selection.level(ids::DRUGS).as_f64() * PENALTY_DRUGS
        + selection.level(ids::ALCOHOL).as_f64() * PENALTY_ALCOHOL
        + selection.level(ids::SMOKING).as_f64() * PENALTY_SMOKING
        + selection.level(ids::PORNOGRAPHY).as_f64() * PENALTY_PORNOGRAPHY
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_core::Level;

    #[test]
    fn empty_selection_is_baseline() {
        let acc = aggregate(&ReferenceData::builtin(), &HabitSelection::new());
        assert_eq!(acc, MetricAccumulator::baseline());
    }

    #[test]
    fn penalty_uses_raw_levels() {
        let selection = HabitSelection::new()
            .with(ids::DRUGS, Level::ONE)
            .with(ids::SMOKING, Level::TWO);
        assert_eq!(substance_penalty(&selection), 8.0 + 14.0);
    }

    #[test]
    fn clamp_is_last() {
        let selection = HabitSelection::new()
            .with(ids::DRUGS, Level::THREE)
            .with(ids::SMOKING, Level::THREE)
            .with(ids::ALCOHOL, Level::THREE);
        let acc = aggregate(&ReferenceData::builtin(), &selection);
        assert_eq!(acc.get(Metric::LifeExpectancy), 40.0);
    }

    #[test]
    fn unknown_habits_are_ignored() {
        let selection = HabitSelection::new().with("skydiving", Level::THREE);
        let acc = aggregate(&ReferenceData::builtin(), &selection);
        assert_eq!(acc, MetricAccumulator::baseline());
    }
}
