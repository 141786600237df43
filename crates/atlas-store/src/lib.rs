//! # atlas-store
//!
//! Owns the single authoritative `(HabitSelection, MetricSet)` pair. Every
//! mutation takes `&mut self` and completes its recomputation before
//! returning, so writes never interleave.

pub mod compare;
pub mod store;

pub use compare::{CompareMode, ComparisonSnapshot, DisplayData, HealthDelta, Trend};
pub use store::AtlasStore;
