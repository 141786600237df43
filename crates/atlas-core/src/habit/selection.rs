use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{HabitId, Level};
use crate::errors::{AtlasError, AtlasResult};

/// Mapping from habit id to selected level.
///
/// Keys need not cover the whole catalogue: an absent key reads as level 0.
/// Ids that are not in the catalogue are kept verbatim and ignored by the
/// engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitSelection {
    levels: BTreeMap<HabitId, Level>,
}

impl HabitSelection {
    /// Create an empty selection (every habit at level 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from raw `(id, level)` pairs, validating every level.
    pub fn from_raw<I, S>(pairs: I) -> AtlasResult<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for (id, raw) in pairs {
            let id = id.into();
            let level = Level::try_from(raw).map_err(|source| AtlasError::InvalidLevel {
                habit: id.clone(),
                source,
            })?;
            selection.set(HabitId::new(id), level);
        }
        Ok(selection)
    }

    /// Builder-style setter.
    pub fn with(mut self, id: impl Into<HabitId>, level: Level) -> Self {
        self.set(id.into(), level);
        self
    }

    /// Level for a habit; absent habits are level 0.
    pub fn level(&self, id: &str) -> Level {
        self.levels.get(id).copied().unwrap_or_default()
    }

    /// Set a habit level, returning the previous explicit level if any.
    pub fn set(&mut self, id: HabitId, level: Level) -> Option<Level> {
        self.levels.insert(id, level)
    }

    /// Whether the selection has an explicit entry for `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.levels.contains_key(id)
    }

    /// Iterate explicit entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&HabitId, Level)> {
        self.levels.iter().map(|(id, level)| (id, *level))
    }

    /// Iterate entries with a level above zero.
    pub fn active(&self) -> impl Iterator<Item = (&HabitId, Level)> {
        self.iter().filter(|(_, level)| level.is_active())
    }

    /// Number of explicit entries (including explicit zeros).
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

impl FromIterator<(HabitId, Level)> for HabitSelection {
    fn from_iter<T: IntoIterator<Item = (HabitId, Level)>>(iter: T) -> Self {
        Self {
            levels: iter.into_iter().collect(),
        }
    }
}
