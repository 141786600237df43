use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{ExponentialFactors, Recommendation};
use crate::habit::OrganId;
use crate::metric::Metric;

/// Organ id → health score.
pub type OrganHealthMap = BTreeMap<OrganId, f64>;

/// Eight finer-grained stats, each in [0, 10].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatBlock {
    pub cardio_strain: f64,
    pub inflammation: f64,
    pub sleep_quality: f64,
    pub stress_load: f64,
    pub recovery_capacity: f64,
    pub cognitive_function: f64,
    pub immune_system: f64,
    pub metabolic_health: f64,
}

impl StatBlock {
    /// Value of a stat metric; `None` for scalar metrics.
    pub fn get(&self, metric: Metric) -> Option<f64> {
        let value = match metric {
            Metric::CardioStrain => self.cardio_strain,
            Metric::Inflammation => self.inflammation,
            Metric::SleepQuality => self.sleep_quality,
            Metric::StressLoad => self.stress_load,
            Metric::RecoveryCapacity => self.recovery_capacity,
            Metric::CognitiveFunction => self.cognitive_function,
            Metric::ImmuneSystem => self.immune_system,
            Metric::MetabolicHealth => self.metabolic_health,
            _ => return None,
        };
        Some(value)
    }

    pub fn values(&self) -> [f64; 8] {
        [
            self.cardio_strain,
            self.inflammation,
            self.sleep_quality,
            self.stress_load,
            self.recovery_capacity,
            self.cognitive_function,
            self.immune_system,
            self.metabolic_health,
        ]
    }
}

/// Full result of one health computation.
///
/// Immutable once produced: a new selection yields a wholly new `MetricSet`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MetricSet {
    pub overall_health: f64,
    pub physical_health: f64,
    pub mental_health: f64,
    pub happiness: f64,
    pub quality_of_life: f64,
    pub physical_fitness: f64,
    pub overall_wellness: f64,
    /// Years.
    pub life_expectancy: f64,
    /// Percent.
    pub disease_risk: f64,
    pub stats: StatBlock,
    /// Vulnerability model organ scores, each in [20, 100].
    pub organ_health: OrganHealthMap,
    pub exponential_factors: ExponentialFactors,
    /// At most five, in tier order.
    pub recommendations: Vec<Recommendation>,
}

impl MetricSet {
    /// Value of any metric.
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::OverallHealth => self.overall_health,
            Metric::PhysicalHealth => self.physical_health,
            Metric::MentalHealth => self.mental_health,
            Metric::Happiness => self.happiness,
            Metric::QualityOfLife => self.quality_of_life,
            Metric::PhysicalFitness => self.physical_fitness,
            Metric::OverallWellness => self.overall_wellness,
            Metric::LifeExpectancy => self.life_expectancy,
            Metric::DiseaseRisk => self.disease_risk,
            stat => self.stats.get(stat).unwrap_or_else(|| stat.baseline()),
        }
    }

    /// Vulnerability model score for an organ.
    pub fn organ(&self, id: &str) -> Option<f64> {
        self.organ_health.get(id).copied()
    }
}
