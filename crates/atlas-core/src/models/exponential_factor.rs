use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::habit::HabitId;

/// One habit's reported contribution through its primary effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExponentialFactor {
    pub habit_name: String,
    pub habit: HabitId,
    /// Absolute scaled magnitude of the primary effect.
    pub magnitude: f64,
    pub explanation: String,
}

/// Factors partitioned by sign, each list in catalogue order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExponentialFactors {
    pub positive: Vec<ExponentialFactor>,
    pub negative: Vec<ExponentialFactor>,
}

impl ExponentialFactors {
    /// Up to `n` positive factors, largest magnitude first.
    pub fn top_positive(&self, n: usize) -> Vec<&ExponentialFactor> {
        top_n(&self.positive, n)
    }

    /// Up to `n` negative factors, largest magnitude first.
    pub fn top_negative(&self, n: usize) -> Vec<&ExponentialFactor> {
        top_n(&self.negative, n)
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    /// Find the factor reported for a habit, in either list.
    pub fn find(&self, habit: &str) -> Option<&ExponentialFactor> {
        self.positive
            .iter()
            .chain(self.negative.iter())
            .find(|f| f.habit.as_str() == habit)
    }
}

// Stable sort: equal magnitudes keep catalogue order.
fn top_n(factors: &[ExponentialFactor], n: usize) -> Vec<&ExponentialFactor> {
    let mut sorted: Vec<&ExponentialFactor> = factors.iter().collect();
    sorted.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude));
    sorted.truncate(n);
    sorted
}
