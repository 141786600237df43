use std::sync::Arc;

use atlas_core::errors::{AtlasError, AtlasResult};
use atlas_core::models::{MetricSet, OrganAssessment};
use atlas_core::{HabitSelection, Level, OrganId, ReferenceData};
use atlas_engine::HealthEngine;
use tracing::{info, instrument, warn};

use crate::compare::{CompareMode, ComparisonSnapshot, DisplayData, HealthDelta};

/// State holder for one user's session.
#[derive(Debug, Clone)]
pub struct AtlasStore {
    engine: HealthEngine,
    selection: HabitSelection,
    metrics: MetricSet,
    compare_mode: CompareMode,
    snapshot: Option<ComparisonSnapshot>,
    focused_organ: Option<OrganId>,
}

impl AtlasStore {
    /// Store with an empty selection.
    pub fn new(engine: HealthEngine) -> Self {
        Self::with_selection(engine, HabitSelection::new())
    }

    /// Store seeded with a selection, e.g. restored from an external snapshot.
    pub fn with_selection(engine: HealthEngine, selection: HabitSelection) -> Self {
        let metrics = engine.compute_health(&selection);
        Self {
            engine,
            selection,
            metrics,
            compare_mode: CompareMode::Off,
            snapshot: None,
            focused_organ: None,
        }
    }

    /// Store over the given reference tables.
    pub fn from_reference(reference: ReferenceData) -> Self {
        Self::new(HealthEngine::new(Arc::new(reference)))
    }

    /// Set a habit level from a raw integer. Invalid levels and unknown
    /// habits are rejected and leave the store untouched.
    #[instrument(skip(self))]
    pub fn set_habit_level(&mut self, habit: &str, level: i64) -> AtlasResult<()> {
        let level = Level::try_from(level).map_err(|source| {
            warn!(habit, %source, "rejected habit level");
            AtlasError::InvalidLevel {
                habit: habit.to_string(),
                source,
            }
        })?;
        self.apply(habit, level)
    }

    /// Set a habit level from a raw float, rejecting fractional values.
    #[instrument(skip(self))]
    pub fn set_habit_level_f64(&mut self, habit: &str, level: f64) -> AtlasResult<()> {
        let level = Level::try_from(level).map_err(|source| {
            warn!(habit, %source, "rejected habit level");
            AtlasError::InvalidLevel {
                habit: habit.to_string(),
                source,
            }
        })?;
        self.apply(habit, level)
    }

    fn apply(&mut self, habit: &str, level: Level) -> AtlasResult<()> {
        let id = self.engine.reference().habits.require(habit)?.id.clone();

        let mut selection = self.selection.clone();
        selection.set(id, level);
        let metrics = self.engine.compute_health(&selection);

        if self.compare_mode.is_engaged() {
            if let Some(snapshot) = self.snapshot.as_mut() {
                snapshot.after_selection = selection.clone();
                snapshot.after_metrics = metrics.clone();
            }
        }
        self.selection = selection;
        self.metrics = metrics;
        Ok(())
    }

    /// Switch comparison mode. Engaging from `off` captures the live state;
    /// returning to `off` discards the snapshot; `before`/`after` switches
    /// only change what is displayed.
    pub fn set_compare_mode(&mut self, mode: CompareMode) {
        let previous = self.compare_mode;
        match (previous.is_engaged(), mode.is_engaged()) {
            (false, true) => {
                self.snapshot = Some(ComparisonSnapshot::capture(&self.selection, &self.metrics));
                info!(?mode, "comparison engaged");
            }
            (_, false) => {
                if self.snapshot.take().is_some() {
                    info!("comparison disengaged");
                }
            }
            (true, true) => {}
        }
        self.compare_mode = mode;
    }

    /// Live state when `off`, `after`, or without a snapshot; the frozen
    /// before half when `before`.
    pub fn current_display_data(&self) -> DisplayData<'_> {
        match (&self.snapshot, self.compare_mode) {
            (Some(snapshot), CompareMode::Before) => DisplayData {
                selection: &snapshot.before_selection,
                metrics: &snapshot.before_metrics,
            },
            _ => DisplayData {
                selection: &self.selection,
                metrics: &self.metrics,
            },
        }
    }

    /// Overall health change from the before half to the displayed state.
    /// `None` outside comparison mode.
    pub fn comparison_delta(&self) -> Option<HealthDelta> {
        let snapshot = self.snapshot.as_ref()?;
        let displayed = self.current_display_data().metrics.overall_health;
        Some(HealthDelta::between(
            snapshot.before_metrics.overall_health,
            displayed,
        ))
    }

    /// Focus an organ, or clear the focus with `None`.
    pub fn focus_organ(&mut self, organ: Option<&str>) -> AtlasResult<()> {
        self.focused_organ = match organ {
            Some(id) => Some(self.engine.reference().organ_mechanism(id)?.id.clone()),
            None => None,
        };
        Ok(())
    }

    pub fn focused_organ(&self) -> Option<&OrganId> {
        self.focused_organ.as_ref()
    }

    /// Mechanism model assessment of the focused organ for the live selection.
    pub fn focused_organ_assessment(&self) -> Option<AtlasResult<OrganAssessment>> {
        self.focused_organ
            .as_ref()
            .map(|id| self.engine.assess_organ(id.as_str(), &self.selection))
    }

    pub fn selection(&self) -> &HabitSelection {
        &self.selection
    }

    pub fn metrics(&self) -> &MetricSet {
        &self.metrics
    }

    pub fn compare_mode(&self) -> CompareMode {
        self.compare_mode
    }

    pub fn snapshot(&self) -> Option<&ComparisonSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn engine(&self) -> &HealthEngine {
        &self.engine
    }
}

impl Default for AtlasStore {
    fn default() -> Self {
        Self::new(HealthEngine::builtin())
    }
}
