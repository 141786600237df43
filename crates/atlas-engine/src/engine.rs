use std::sync::Arc;

use atlas_core::models::{MetricSet, OrganAssessment};
use atlas_core::{AtlasResult, HabitSelection, Metric, ReferenceData};
use tracing::instrument;

use crate::organ::{MechanismProjector, OrganHealthProvider, VulnerabilityProjector};
use crate::{aggregator, composite, factors, recommendations};

/// Health impact scoring engine.
///
/// Immutable after construction; every call is a pure function of the
/// reference data and the selection passed in.
#[derive(Debug, Clone)]
pub struct HealthEngine {
    reference: Arc<ReferenceData>,
}

impl HealthEngine {
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self { reference }
    }

    /// Engine over the built-in reference tables.
    pub fn builtin() -> Self {
        Self::new(Arc::new(ReferenceData::builtin()))
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// Compute the full metric set for a selection. Total: habit ids outside
    /// the catalogue contribute nothing.
    #[instrument(skip_all, fields(habits = selection.len()))]
    pub fn compute_health(&self, selection: &HabitSelection) -> MetricSet {
        let reference = self.reference.as_ref();

        let mut acc = aggregator::aggregate(reference, selection);
        composite::derive(&mut acc, selection);

        let organ_health = VulnerabilityProjector::new(reference).project(selection);
        let exponential_factors = factors::report(reference, selection);
        let recommendations = recommendations::rank(reference, selection);

        tracing::debug!(
            overall_health = acc.get(Metric::OverallHealth),
            life_expectancy = acc.get(Metric::LifeExpectancy),
            recommendations = recommendations.len(),
            "computed health"
        );

        MetricSet {
            overall_health: acc.get(Metric::OverallHealth),
            physical_health: acc.get(Metric::PhysicalHealth),
            mental_health: acc.get(Metric::MentalHealth),
            happiness: acc.get(Metric::Happiness),
            quality_of_life: acc.get(Metric::QualityOfLife),
            physical_fitness: acc.get(Metric::PhysicalFitness),
            overall_wellness: acc.get(Metric::OverallWellness),
            life_expectancy: acc.get(Metric::LifeExpectancy),
            disease_risk: acc.get(Metric::DiseaseRisk),
            stats: acc.stat_block(),
            organ_health,
            exponential_factors,
            recommendations,
        }
    }

    /// Vulnerability model score for one organ.
    #[instrument(skip(self, selection))]
    pub fn organ_score(&self, organ: &str, selection: &HabitSelection) -> AtlasResult<f64> {
        VulnerabilityProjector::new(&self.reference).score(organ, selection)
    }

    /// Mechanism model assessment for one organ.
    #[instrument(skip(self, selection))]
    pub fn assess_organ(
        &self,
        organ: &str,
        selection: &HabitSelection,
    ) -> AtlasResult<OrganAssessment> {
        MechanismProjector::new(&self.reference).assess(organ, selection)
    }

    /// Mechanism model: weighted average organ health.
    pub fn overall_body_health(&self, selection: &HabitSelection) -> f64 {
        MechanismProjector::new(&self.reference).overall_body_health(selection)
    }

    /// Mechanism model: disease risk derived from organ health.
    pub fn aggregate_disease_risk(&self, selection: &HabitSelection) -> f64 {
        MechanismProjector::new(&self.reference).aggregate_disease_risk(selection)
    }
}

impl Default for HealthEngine {
    fn default() -> Self {
        Self::builtin()
    }
}
