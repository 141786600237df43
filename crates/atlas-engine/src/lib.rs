//! # atlas-engine
//!
//! Deterministic health impact scoring. One call to
//! [`HealthEngine::compute_health`] runs, in order:
//!
//! 1. metric aggregation (baseline, effect fold, substance penalty, clamp)
//! 2. composite derivation from the clamped metrics
//! 3. vulnerability-model organ projection
//! 4. exponential factor reporting
//! 5. recommendation ranking
//!
//! The mechanism organ model is exposed separately through
//! [`HealthEngine::assess_organ`].

pub mod aggregator;
pub mod composite;
pub mod engine;
pub mod factors;
pub mod organ;
pub mod recommendations;
pub mod scaling;

pub use engine::HealthEngine;
pub use organ::{MechanismProjector, OrganHealthProvider, VulnerabilityProjector};
pub use scaling::ScalingCurve;
