//! Configuration system for Atlas.
//! TOML-based, layered resolution: env > project > user > defaults.

pub mod atlas_config;
pub mod observability_config;
pub mod reference_config;

pub use atlas_config::AtlasConfig;
pub use observability_config::ObservabilityConfig;
pub use reference_config::ReferenceConfig;
