//! Organ tables for the two organ health models.
//!
//! The vulnerability model keys signed weights by habit; the mechanism model
//! keeps ordered top-harmful and top-beneficial lists with a textual
//! mechanism per entry. They are separate tables with separate scaling.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::habit::{HabitId, OrganId};

/// Vulnerability model entry for one organ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganProfile {
    pub id: OrganId,
    pub name: String,
    /// Starting health in [0, 100].
    pub baseline: f64,
    /// Habit → signed weight. Positive harms, negative helps.
    #[serde(default)]
    pub vulnerabilities: BTreeMap<HabitId, f64>,
}

impl OrganProfile {
    pub fn weight(&self, habit: &str) -> Option<f64> {
        self.vulnerabilities.get(habit).copied()
    }
}

/// One entry of a mechanism-model top list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MechanismEntry {
    pub habit: HabitId,
    /// Non-negative impact fraction at full intensity.
    pub impact: f64,
    /// How the habit affects the organ.
    pub mechanism: String,
}

impl MechanismEntry {
    pub fn new(habit: &str, impact: f64, mechanism: &str) -> Self {
        Self {
            habit: HabitId::new(habit),
            impact,
            mechanism: mechanism.to_string(),
        }
    }
}

/// Mechanism model entry for one organ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganMechanismProfile {
    pub id: OrganId,
    pub name: String,
    pub baseline: f64,
    /// Weight in the overall body health average. Organs without a weight
    /// are left out of that average.
    #[serde(default)]
    pub body_weight: Option<f64>,
    #[serde(default)]
    pub top_harmful: Vec<MechanismEntry>,
    #[serde(default)]
    pub top_beneficial: Vec<MechanismEntry>,
}
