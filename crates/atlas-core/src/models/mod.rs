//! Output models produced by the engine.

pub mod exponential_factor;
pub mod metric_set;
pub mod organ_assessment;
pub mod recommendation;

pub use exponential_factor::{ExponentialFactor, ExponentialFactors};
pub use metric_set::{MetricSet, OrganHealthMap, StatBlock};
pub use organ_assessment::{AffectingHabit, OrganAssessment, RiskTier};
pub use recommendation::{Priority, Recommendation};
