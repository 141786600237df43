//! Comparison snapshot types.

use atlas_core::models::MetricSet;
use atlas_core::HabitSelection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which state comparison mode displays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum CompareMode {
    #[default]
    Off,
    Before,
    After,
}

impl CompareMode {
    pub fn is_engaged(self) -> bool {
        self != Self::Off
    }
}

/// Frozen "before" state and the tracked "after" state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSnapshot {
    pub before_selection: HabitSelection,
    pub before_metrics: MetricSet,
    pub after_selection: HabitSelection,
    pub after_metrics: MetricSet,
    pub captured_at: DateTime<Utc>,
}

impl ComparisonSnapshot {
    /// Capture the live state as both halves.
    pub fn capture(selection: &HabitSelection, metrics: &MetricSet) -> Self {
        Self {
            before_selection: selection.clone(),
            before_metrics: metrics.clone(),
            after_selection: selection.clone(),
            after_metrics: metrics.clone(),
            captured_at: Utc::now(),
        }
    }
}

/// The state external consumers should render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayData<'a> {
    pub selection: &'a HabitSelection,
    pub metrics: &'a MetricSet,
}

/// Direction of change in overall health, judged on the unrounded difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improved,
    Declined,
    Unchanged,
}

/// Overall health difference between the snapshot's before half and the
/// displayed state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HealthDelta {
    pub before: f64,
    pub after: f64,
    /// `after - before`, rounded to a whole percentage point.
    pub change: f64,
    pub trend: Trend,
}

impl HealthDelta {
    pub fn between(before: f64, after: f64) -> Self {
        let diff = after - before;
        let trend = if diff > 0.0 {
            Trend::Improved
        } else if diff < 0.0 {
            Trend::Declined
        } else {
            Trend::Unchanged
        };
        Self {
            before,
            after,
            change: diff.round(),
            trend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_trend_uses_raw_difference() {
        assert_eq!(HealthDelta::between(50.0, 62.0).trend, Trend::Improved);
        assert_eq!(HealthDelta::between(50.0, 41.0).trend, Trend::Declined);
        assert_eq!(HealthDelta::between(50.0, 50.0).trend, Trend::Unchanged);
        assert_eq!(HealthDelta::between(50.0, 62.0).change, 12.0);

        let small_gain = HealthDelta::between(50.0, 50.3);
        assert_eq!(small_gain.trend, Trend::Improved);
        assert_eq!(small_gain.change, 0.0);
        assert_eq!(HealthDelta::between(50.0, 49.8).trend, Trend::Declined);
    }
}
