use atlas_core::constants::{ORGAN_IMPACT_MULTIPLIER, VULNERABILITY_ORGAN_BOUNDS};
use atlas_core::reference::OrganProfile;
use atlas_core::{AtlasResult, HabitSelection, OrganId, ReferenceData};

use super::OrganHealthProvider;
use crate::scaling::ScalingCurve;

/// Vulnerability model: `baseline − Σ weight × harmful_scaling(level) × 2`,
/// clamped to [20, 100]. Weight sign encodes direction, so beneficial
/// habits (negative weights) raise the score.
#[derive(Debug, Clone, Copy)]
pub struct VulnerabilityProjector<'a> {
    reference: &'a ReferenceData,
}

impl<'a> VulnerabilityProjector<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self { reference }
    }

    fn score_profile(profile: &OrganProfile, selection: &HabitSelection) -> f64 {
        let mut score = profile.baseline;
        for (habit, weight) in &profile.vulnerabilities {
            let level = selection.level(habit.as_str());
            if level.is_active() {
                score -= weight * ScalingCurve::OrganHarmful.intensity(level) * ORGAN_IMPACT_MULTIPLIER;
            }
        }
        let (lo, hi) = VULNERABILITY_ORGAN_BOUNDS;
        score.clamp(lo, hi)
    }
}

impl OrganHealthProvider for VulnerabilityProjector<'_> {
    fn organ_ids(&self) -> Vec<&OrganId> {
        self.reference.organs.iter().map(|o| &o.id).collect()
    }

    fn bounds(&self) -> (f64, f64) {
        VULNERABILITY_ORGAN_BOUNDS
    }

    fn score(&self, organ: &str, selection: &HabitSelection) -> AtlasResult<f64> {
        let profile = self.reference.organ(organ)?;
        Ok(Self::score_profile(profile, selection))
    }
}
