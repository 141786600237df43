use serde::{Deserialize, Serialize};

use crate::habit::HabitId;

/// Fixed habit lists scanned by the recommendation ranker, in tier order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationTiers {
    /// Harmful habits that trigger a critical "reduce" recommendation.
    pub critical_harmful: Vec<HabitId>,
    /// Beneficial habits that trigger a high "increase" recommendation.
    pub critical_beneficial: Vec<HabitId>,
    /// Beneficial habits that trigger a moderate "improve" recommendation.
    pub secondary_beneficial: Vec<HabitId>,
}

impl RecommendationTiers {
    /// Every habit referenced by any tier, with its tier name.
    pub fn referenced(&self) -> impl Iterator<Item = (&'static str, &HabitId)> {
        self.critical_harmful
            .iter()
            .map(|h| ("recommendations.critical_harmful", h))
            .chain(
                self.critical_beneficial
                    .iter()
                    .map(|h| ("recommendations.critical_beneficial", h)),
            )
            .chain(
                self.secondary_beneficial
                    .iter()
                    .map(|h| ("recommendations.secondary_beneficial", h)),
            )
    }
}
