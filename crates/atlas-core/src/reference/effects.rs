//! Effect model: per-habit primary, secondary and minimal metric effects.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::habit::HabitId;
use crate::metric::Metric;

/// A target metric and its signed magnitude at full intensity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectSpec {
    pub metric: Metric,
    pub magnitude: f64,
}

impl EffectSpec {
    pub const fn new(metric: Metric, magnitude: f64) -> Self {
        Self { metric, magnitude }
    }

    /// Magnitude scaled by an intensity factor.
    pub fn scaled(&self, intensity: f64) -> f64 {
        self.magnitude * intensity
    }
}

/// Effects of one habit, in decreasing priority.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitEffectProfile {
    pub primary: EffectSpec,
    #[serde(default)]
    pub secondary: Vec<EffectSpec>,
    #[serde(default)]
    pub minimal: Vec<EffectSpec>,
    /// Explanation template for exponential factors. `{level}` is replaced
    /// with the selected level.
    #[serde(default)]
    pub explanation: Option<String>,
}

impl HabitEffectProfile {
    /// Secondary then minimal effects, in declaration order.
    pub fn supporting_effects(&self) -> impl Iterator<Item = &EffectSpec> {
        self.secondary.iter().chain(self.minimal.iter())
    }
}

/// Habit id → effect profile.
pub type EffectModel = BTreeMap<HabitId, HabitEffectProfile>;
