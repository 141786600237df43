//! Organ health providers.
//!
//! Two independent models, each with its own tables, scaling and bounds:
//! the vulnerability model feeds `MetricSet::organ_health`; the mechanism
//! model produces risk tiers and explanations for a single organ.

pub mod mechanism;
pub mod vulnerability;

use atlas_core::models::OrganHealthMap;
use atlas_core::{AtlasResult, HabitSelection, OrganId};

pub use mechanism::MechanismProjector;
pub use vulnerability::VulnerabilityProjector;

/// A model that scores organs from a habit selection.
pub trait OrganHealthProvider {
    /// Organ ids this model knows, in table order.
    fn organ_ids(&self) -> Vec<&OrganId>;

    /// Inclusive `(lo, hi)` score range.
    fn bounds(&self) -> (f64, f64);

    /// Score one organ. Fails with `UnknownOrgan` for ids outside the model.
    fn score(&self, organ: &str, selection: &HabitSelection) -> AtlasResult<f64>;

    /// Score every organ.
    fn project(&self, selection: &HabitSelection) -> OrganHealthMap {
        self.organ_ids()
            .into_iter()
            .filter_map(|id| match self.score(id.as_str(), selection) {
                Ok(score) => Some((id.clone(), score)),
                Err(error) => {
                    tracing::debug!(organ = %id, %error, "dropping organ from projection");
                    None
                }
            })
            .collect()
    }
}
