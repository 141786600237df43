//! # atlas-core
//!
//! Foundation crate for the Atlas health impact engine.
//! Defines habit ids and levels, the metric vocabulary, the static reference
//! data (catalogue, effect model, organ models), output models, errors,
//! config, tracing setup and the domain constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod habit;
pub mod metric;
pub mod models;
pub mod reference;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::AtlasConfig;
pub use errors::{AtlasError, AtlasResult};
pub use habit::{HabitId, HabitKind, HabitSelection, Level, OrganId};
pub use metric::Metric;
pub use models::MetricSet;
pub use reference::ReferenceData;
