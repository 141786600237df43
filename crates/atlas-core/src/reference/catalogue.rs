//! Habit catalogue: the closed list of valid habit ids and display names.

use serde::{Deserialize, Serialize};

use crate::errors::{AtlasError, AtlasResult};
use crate::habit::{HabitId, HabitKind};

/// One catalogue entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitEntry {
    pub id: HabitId,
    /// Display name (e.g. "Sleep Consistency").
    pub name: String,
    pub kind: HabitKind,
}

impl HabitEntry {
    pub fn new(id: &str, name: &str, kind: HabitKind) -> Self {
        Self {
            id: HabitId::new(id),
            name: name.to_string(),
            kind,
        }
    }
}

/// Ordered habit catalogue. Catalogue order is the iteration order of every
/// fold over a selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitCatalogue {
    entries: Vec<HabitEntry>,
}

impl HabitCatalogue {
    pub fn new(entries: Vec<HabitEntry>) -> Self {
        Self { entries }
    }

    /// Look up a habit by id.
    pub fn get(&self, id: &str) -> Option<&HabitEntry> {
        self.entries.iter().find(|e| e.id.as_str() == id)
    }

    /// Look up a habit by id, failing with `UnknownHabit`.
    pub fn require(&self, id: &str) -> AtlasResult<&HabitEntry> {
        self.get(id).ok_or_else(|| AtlasError::UnknownHabit { id: id.to_string() })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Display name for a habit, falling back to the raw id.
    pub fn name_of<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map(|e| e.name.as_str()).unwrap_or(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HabitEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
