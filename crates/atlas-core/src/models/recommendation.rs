use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::habit::HabitId;

/// Recommendation tier, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Moderate,
}

/// One actionable suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recommendation {
    pub priority: Priority,
    pub habit: HabitId,
    pub action: String,
    pub rationale: String,
    pub expected_impact: String,
}
