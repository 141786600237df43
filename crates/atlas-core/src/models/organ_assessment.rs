use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{RISK_HIGH_THRESHOLD, RISK_LOW_THRESHOLD, RISK_MODERATE_THRESHOLD};
use crate::habit::{HabitId, HabitKind, Level, OrganId};

/// Qualitative organ risk from the mechanism model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskTier {
    /// `low` ≥ 80, `moderate` ≥ 60, `high` ≥ 40, else `critical`.
    pub fn from_health(health: f64) -> Self {
        if health >= RISK_LOW_THRESHOLD {
            Self::Low
        } else if health >= RISK_MODERATE_THRESHOLD {
            Self::Moderate
        } else if health >= RISK_HIGH_THRESHOLD {
            Self::High
        } else {
            Self::Critical
        }
    }

    /// Whether the explanation should advise professional consultation.
    pub fn is_elevated(self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selected habit that moves an organ's score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AffectingHabit {
    pub habit: HabitId,
    pub name: String,
    /// Signed points: negative harms, positive helps.
    pub impact: f64,
    pub level: Level,
    pub mechanism: String,
    pub kind: HabitKind,
}

/// Mechanism model view of one organ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrganAssessment {
    pub organ: OrganId,
    pub name: String,
    /// In [10, 100].
    pub health: f64,
    pub risk: RiskTier,
    /// Harmful entries first, then beneficial, each in table order.
    pub affecting_habits: Vec<AffectingHabit>,
    pub explanation: String,
}

impl OrganAssessment {
    pub fn harmful(&self) -> impl Iterator<Item = &AffectingHabit> {
        self.affecting_habits
            .iter()
            .filter(|h| h.kind == HabitKind::Harmful)
    }

    pub fn beneficial(&self) -> impl Iterator<Item = &AffectingHabit> {
        self.affecting_habits
            .iter()
            .filter(|h| h.kind == HabitKind::Beneficial)
    }
}
