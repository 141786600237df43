//! Exponential factor reporter.
//!
//! One record per habit whose primary effect fired, in catalogue order and
//! partitioned by sign. Sorting is left to consumers
//! (see [`ExponentialFactors::top_positive`]).

use atlas_core::models::{ExponentialFactor, ExponentialFactors};
use atlas_core::reference::HabitEffectProfile;
use atlas_core::{HabitSelection, Level, ReferenceData};

use crate::scaling::ScalingCurve;

pub fn report(reference: &ReferenceData, selection: &HabitSelection) -> ExponentialFactors {
    let mut factors = ExponentialFactors::default();
    for entry in reference.habits.iter() {
        let level = selection.level(entry.id.as_str());
        if !level.is_active() {
            continue;
        }
        let Some(profile) = reference.effects.get(&entry.id) else {
            continue;
        };
        let scaled = profile.primary.scaled(ScalingCurve::Metric.intensity(level));
        if scaled == 0.0 {
            continue;
        }
        let factor = ExponentialFactor {
            habit_name: entry.name.clone(),
            habit: entry.id.clone(),
            magnitude: scaled.abs(),
            explanation: explanation(profile, level),
        };
        if scaled > 0.0 {
            factors.positive.push(factor);
        } else {
            factors.negative.push(factor);
        }
    }
    factors
}

/// The habit's template with `{level}` filled in, or the generic fallback.
pub fn explanation(profile: &HabitEffectProfile, level: Level) -> String {
    match &profile.explanation {
        Some(template) => template.replace("{level}", &level.to_string()),
        None => format!(
            "This habit has specialized impact on {} at level {level}.",
            profile.primary.metric.as_str().replace('_', " ")
        ),
    }
}
