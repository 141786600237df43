//! Recommendation ranker.
//!
//! Single pass over three fixed tiers: critical (reduce a harmful habit),
//! high (raise a key beneficial habit below level 2), moderate (raise a
//! secondary beneficial habit below level 3, only while the list is short).
//! The list is truncated to five, keeping tier order then list order.

use atlas_core::constants::{
    CRITICAL_TIER_MIN_LEVEL, HIGH_TIER_TARGET_LEVEL, MAX_RECOMMENDATIONS,
    MODERATE_TIER_TARGET_LEVEL,
};
use atlas_core::models::{Priority, Recommendation};
use atlas_core::{HabitId, HabitSelection, ReferenceData};

pub fn rank(reference: &ReferenceData, selection: &HabitSelection) -> Vec<Recommendation> {
    let tiers = &reference.recommendations;
    let mut list = Vec::new();

    for habit in &tiers.critical_harmful {
        if selection.level(habit.as_str()).value() > CRITICAL_TIER_MIN_LEVEL {
            list.push(recommendation(reference, habit, Priority::Critical));
        }
    }
    for habit in &tiers.critical_beneficial {
        if selection.level(habit.as_str()).value() < HIGH_TIER_TARGET_LEVEL {
            list.push(recommendation(reference, habit, Priority::High));
        }
    }
    if list.len() < MAX_RECOMMENDATIONS {
        for habit in &tiers.secondary_beneficial {
            if selection.level(habit.as_str()).value() < MODERATE_TIER_TARGET_LEVEL {
                list.push(recommendation(reference, habit, Priority::Moderate));
            }
        }
    }

    list.truncate(MAX_RECOMMENDATIONS);
    list
}

fn recommendation(reference: &ReferenceData, habit: &HabitId, priority: Priority) -> Recommendation {
    let name = reference.habits.name_of(habit.as_str()).to_lowercase();
    let (action, rationale, expected_impact) = match priority {
        Priority::Critical => (
            format!("Reduce {name} immediately"),
            "This habit has severe specialized negative effects on your primary health systems.",
            "Reducing this could improve your primary affected health metric by 10-15%.",
        ),
        Priority::High => (
            format!("Increase {name}"),
            "This habit provides specialized benefits that significantly improve your primary health systems.",
            "Improving this could increase your primary health metric by 8-12%.",
        ),
        Priority::Moderate => (
            format!("Improve {name}"),
            "This habit provides specialized benefits for your targeted health areas.",
            "Could improve your specialized health metrics by 5-8%.",
        ),
    };
    Recommendation {
        priority,
        habit: habit.clone(),
        action,
        rationale: rationale.to_string(),
        expected_impact: expected_impact.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atlas_core::habit::ids;
    use atlas_core::Level;

    #[test]
    fn empty_selection_fills_high_then_moderate() {
        let recs = rank(&ReferenceData::builtin(), &HabitSelection::new());
        let priorities: Vec<Priority> = recs.iter().map(|r| r.priority).collect();
        assert_eq!(
            priorities,
            vec![
                Priority::High,
                Priority::High,
                Priority::High,
                Priority::Moderate,
                Priority::Moderate,
            ]
        );
        assert_eq!(recs[0].action, "Increase sleep consistency");
        assert_eq!(recs[4].habit.as_str(), ids::HYDRATION);
    }

    #[test]
    fn moderate_tier_skipped_when_full() {
        let selection = HabitSelection::new()
            .with(ids::DRUGS, Level::ONE)
            .with(ids::SMOKING, Level::ONE)
            .with(ids::CHRONIC_STRESS, Level::ONE);
        let recs = rank(&ReferenceData::builtin(), &selection);
        assert_eq!(recs.len(), 5);
        assert!(recs.iter().all(|r| r.priority != Priority::Moderate));
        assert_eq!(recs[1].action, "Reduce smoking immediately");
    }
}
