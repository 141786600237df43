use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{
    DISEASE_RISK_BASELINE, DISEASE_RISK_BOUNDS, LIFE_EXPECTANCY_BASELINE, LIFE_EXPECTANCY_BOUNDS,
    SCALAR_BASELINE, SCALAR_BOUNDS, STAT_BASELINE, STAT_BOUNDS,
};

/// Every metric an effect can target.
///
/// Nine scalar metrics followed by the eight stat block entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    // Scalars (9)
    OverallHealth,
    PhysicalHealth,
    MentalHealth,
    Happiness,
    QualityOfLife,
    PhysicalFitness,
    OverallWellness,
    LifeExpectancy,
    DiseaseRisk,
    // Stat block (8)
    CardioStrain,
    Inflammation,
    SleepQuality,
    StressLoad,
    RecoveryCapacity,
    CognitiveFunction,
    ImmuneSystem,
    MetabolicHealth,
}

impl Metric {
    /// Total number of metrics.
    pub const COUNT: usize = 17;

    /// All variants, in accumulator index order.
    pub const ALL: [Metric; 17] = [
        Self::OverallHealth,
        Self::PhysicalHealth,
        Self::MentalHealth,
        Self::Happiness,
        Self::QualityOfLife,
        Self::PhysicalFitness,
        Self::OverallWellness,
        Self::LifeExpectancy,
        Self::DiseaseRisk,
        Self::CardioStrain,
        Self::Inflammation,
        Self::SleepQuality,
        Self::StressLoad,
        Self::RecoveryCapacity,
        Self::CognitiveFunction,
        Self::ImmuneSystem,
        Self::MetabolicHealth,
    ];

    /// Position in [`Metric::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether this metric belongs to the stat block.
    pub fn is_stat(self) -> bool {
        matches!(
            self,
            Self::CardioStrain
                | Self::Inflammation
                | Self::SleepQuality
                | Self::StressLoad
                | Self::RecoveryCapacity
                | Self::CognitiveFunction
                | Self::ImmuneSystem
                | Self::MetabolicHealth
        )
    }

    /// Starting value before any habit is applied.
    pub fn baseline(self) -> f64 {
        match self {
            Self::LifeExpectancy => LIFE_EXPECTANCY_BASELINE,
            Self::DiseaseRisk => DISEASE_RISK_BASELINE,
            m if m.is_stat() => STAT_BASELINE,
            _ => SCALAR_BASELINE,
        }
    }

    /// Inclusive `(lo, hi)` clamp range.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Self::LifeExpectancy => LIFE_EXPECTANCY_BOUNDS,
            Self::DiseaseRisk => DISEASE_RISK_BOUNDS,
            m if m.is_stat() => STAT_BOUNDS,
            _ => SCALAR_BOUNDS,
        }
    }

    /// Clamp a value into this metric's range.
    pub fn clamp(self, value: f64) -> f64 {
        let (lo, hi) = self.bounds();
        value.clamp(lo, hi)
    }

    /// Snake-case name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OverallHealth => "overall_health",
            Self::PhysicalHealth => "physical_health",
            Self::MentalHealth => "mental_health",
            Self::Happiness => "happiness",
            Self::QualityOfLife => "quality_of_life",
            Self::PhysicalFitness => "physical_fitness",
            Self::OverallWellness => "overall_wellness",
            Self::LifeExpectancy => "life_expectancy",
            Self::DiseaseRisk => "disease_risk",
            Self::CardioStrain => "cardio_strain",
            Self::Inflammation => "inflammation",
            Self::SleepQuality => "sleep_quality",
            Self::StressLoad => "stress_load",
            Self::RecoveryCapacity => "recovery_capacity",
            Self::CognitiveFunction => "cognitive_function",
            Self::ImmuneSystem => "immune_system",
            Self::MetabolicHealth => "metabolic_health",
        }
    }
}
