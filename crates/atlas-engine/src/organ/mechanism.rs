use atlas_core::constants::{
    AGGREGATE_RISK_BASELINE, AGGREGATE_RISK_CEILING, AGGREGATE_RISK_FLOOR, AGGREGATE_RISK_SCALE,
    BENEFICIAL_IMPACT_CAP, EXPLANATION_MAX_HARMFUL, HARMFUL_IMPACT_CAP, MECHANISM_ORGAN_BOUNDS,
};
use atlas_core::models::{AffectingHabit, OrganAssessment, RiskTier};
use atlas_core::reference::{MechanismEntry, OrganMechanismProfile};
use atlas_core::{AtlasResult, HabitKind, HabitSelection, OrganId, ReferenceData};

use super::OrganHealthProvider;
use crate::scaling::ScalingCurve;

/// Mechanism model: harmful entries subtract `impact × harmful_scaling × 100`,
/// beneficial entries add `impact × beneficial_scaling × 60`, clamped to
/// [10, 100].
#[derive(Debug, Clone, Copy)]
pub struct MechanismProjector<'a> {
    reference: &'a ReferenceData,
}

impl<'a> MechanismProjector<'a> {
    pub fn new(reference: &'a ReferenceData) -> Self {
        Self { reference }
    }

    /// Full assessment of one organ: score, risk tier, contributing habits
    /// and explanation.
    pub fn assess(&self, organ: &str, selection: &HabitSelection) -> AtlasResult<OrganAssessment> {
        let profile = self.reference.organ_mechanism(organ)?;
        Ok(self.assess_profile(profile, selection))
    }

    /// Weighted average of organ health over organs with a body weight.
    /// Returns the unweighted baseline mean when no organ carries a weight.
    pub fn overall_body_health(&self, selection: &HabitSelection) -> f64 {
        let mut total = 0.0;
        let mut total_weight = 0.0;
        for profile in &self.reference.organ_mechanisms {
            if let Some(weight) = profile.body_weight {
                total += self.health(profile, selection) * weight;
                total_weight += weight;
            }
        }
        if total_weight > 0.0 {
            total / total_weight
        } else {
            let (lo, hi) = MECHANISM_ORGAN_BOUNDS;
            (lo + hi) / 2.0
        }
    }

    /// Disease risk estimate from organ health: mean of `max(0, 100 − health)`
    /// over every organ, scaled onto the baseline and capped.
    pub fn aggregate_disease_risk(&self, selection: &HabitSelection) -> f64 {
        let organs = &self.reference.organ_mechanisms;
        if organs.is_empty() {
            return AGGREGATE_RISK_BASELINE;
        }
        let total: f64 = organs
            .iter()
            .map(|p| (100.0 - self.health(p, selection)).max(0.0))
            .sum();
        let mean = total / organs.len() as f64;
        (AGGREGATE_RISK_BASELINE + mean * AGGREGATE_RISK_SCALE)
            .min(AGGREGATE_RISK_CEILING)
            .max(AGGREGATE_RISK_FLOOR)
    }

    fn health(&self, profile: &OrganMechanismProfile, selection: &HabitSelection) -> f64 {
        let affecting = self.affecting_habits(profile, selection);
        clamp_health(profile.baseline + affecting.iter().map(|h| h.impact).sum::<f64>())
    }

    fn assess_profile(
        &self,
        profile: &OrganMechanismProfile,
        selection: &HabitSelection,
    ) -> OrganAssessment {
        let affecting_habits = self.affecting_habits(profile, selection);
        let health =
            clamp_health(profile.baseline + affecting_habits.iter().map(|h| h.impact).sum::<f64>());
        let risk = RiskTier::from_health(health);
        let explanation = explain(&profile.name, health, risk, &affecting_habits);
        OrganAssessment {
            organ: profile.id.clone(),
            name: profile.name.clone(),
            health,
            risk,
            affecting_habits,
            explanation,
        }
    }

    /// Selected habits from the organ's top lists, harmful first.
    /// Entries whose habit is not in the catalogue are skipped.
    fn affecting_habits(
        &self,
        profile: &OrganMechanismProfile,
        selection: &HabitSelection,
    ) -> Vec<AffectingHabit> {
        let harmful = profile
            .top_harmful
            .iter()
            .filter_map(|e| self.contribution(e, selection, HabitKind::Harmful));
        let beneficial = profile
            .top_beneficial
            .iter()
            .filter_map(|e| self.contribution(e, selection, HabitKind::Beneficial));
        harmful.chain(beneficial).collect()
    }

    fn contribution(
        &self,
        entry: &MechanismEntry,
        selection: &HabitSelection,
        kind: HabitKind,
    ) -> Option<AffectingHabit> {
        let level = selection.level(entry.habit.as_str());
        if !level.is_active() {
            return None;
        }
        let habit = self.reference.habits.get(entry.habit.as_str())?;
        let impact = match kind {
            HabitKind::Harmful => {
                -(entry.impact * ScalingCurve::OrganHarmful.intensity(level) * HARMFUL_IMPACT_CAP)
            }
            HabitKind::Beneficial => {
                entry.impact * ScalingCurve::OrganBeneficial.intensity(level) * BENEFICIAL_IMPACT_CAP
            }
        };
        Some(AffectingHabit {
            habit: entry.habit.clone(),
            name: habit.name.clone(),
            impact,
            level,
            mechanism: entry.mechanism.clone(),
            kind,
        })
    }
}

impl OrganHealthProvider for MechanismProjector<'_> {
    fn organ_ids(&self) -> Vec<&OrganId> {
        self.reference.organ_mechanisms.iter().map(|o| &o.id).collect()
    }

    fn bounds(&self) -> (f64, f64) {
        MECHANISM_ORGAN_BOUNDS
    }

    fn score(&self, organ: &str, selection: &HabitSelection) -> AtlasResult<f64> {
        let profile = self.reference.organ_mechanism(organ)?;
        Ok(self.health(profile, selection))
    }
}

fn clamp_health(value: f64) -> f64 {
    let (lo, hi) = MECHANISM_ORGAN_BOUNDS;
    value.clamp(lo, hi)
}

fn explain(organ_name: &str, health: f64, risk: RiskTier, affecting: &[AffectingHabit]) -> String {
    let organ = organ_name.to_lowercase();
    let mut message = match risk {
        RiskTier::Low => format!("Your {organ} health is excellent"),
        RiskTier::Moderate => format!("Your {organ} health shows some signs of stress"),
        RiskTier::High => format!("Your {organ} health is worrying"),
        RiskTier::Critical => format!("Your {organ} health is critical"),
    };

    let harmful: Vec<&AffectingHabit> = affecting
        .iter()
        .filter(|h| h.kind == HabitKind::Harmful)
        .take(EXPLANATION_MAX_HARMFUL)
        .collect();
    let top_beneficial = affecting.iter().find(|h| h.kind == HabitKind::Beneficial);

    if let Some((first, rest)) = harmful.split_first() {
        message.push_str(&format!(", mainly due to {}", first.name.to_lowercase()));
        if let Some(second) = rest.first() {
            message.push_str(&format!(" and {}", second.name.to_lowercase()));
        }
    }
    if let Some(beneficial) = top_beneficial {
        let name = beneficial.name.to_lowercase();
        if harmful.is_empty() {
            message.push_str(&format!(", benefiting from your {name}"));
        } else {
            message.push_str(&format!(". Fortunately, your {name} is helping recovery"));
        }
    }

    message.push_str(&format!(". Current state: {}% health.", health.round()));
    if risk.is_elevated() {
        message.push_str(" Consulting a health professional is recommended.");
    }
    message
}
