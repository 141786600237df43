//! Static reference data: habit catalogue, effect model, organ models and
//! recommendation tiers.
//!
//! Built-in tables are compiled in. A TOML file can replace any top-level
//! table; tables present in the file replace the built-in table wholesale.
//! Every load is validated against the catalogue and fails fast on a table
//! that references an unknown habit.

mod builtin;
pub mod catalogue;
pub mod effects;
pub mod organs;
pub mod tiers;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use catalogue::{HabitCatalogue, HabitEntry};
pub use effects::{EffectModel, EffectSpec, HabitEffectProfile};
pub use organs::{MechanismEntry, OrganMechanismProfile, OrganProfile};
pub use tiers::RecommendationTiers;

use crate::errors::{AtlasError, AtlasResult, ConfigError};

/// Versioned bundle of every static table the engine reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceData {
    pub version: u32,
    pub habits: HabitCatalogue,
    pub effects: EffectModel,
    /// Vulnerability organ model.
    pub organs: Vec<OrganProfile>,
    /// Mechanism organ model.
    pub organ_mechanisms: Vec<OrganMechanismProfile>,
    pub recommendations: RecommendationTiers,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ReferenceData {
    /// The compiled-in reference tables.
    pub fn builtin() -> Self {
        builtin::reference_data()
    }

    /// Parse and validate reference data from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let data: ReferenceData = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        data.validate()?;
        Ok(data)
    }

    /// Load reference data from a TOML file, checking its declared version.
    pub fn load(path: &Path, expected_version: u32) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let data: ReferenceData = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        if data.version != expected_version {
            return Err(ConfigError::VersionMismatch {
                expected: expected_version,
                actual: data.version,
            });
        }
        data.validate()?;
        tracing::info!(
            path = %path.display(),
            version = data.version,
            habits = data.habits.len(),
            organs = data.organs.len(),
            "loaded reference data"
        );
        Ok(data)
    }

    /// Validate internal consistency. Every habit id referenced by any table
    /// must exist in the catalogue.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.habits.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "habits".to_string(),
                message: "catalogue must not be empty".to_string(),
            });
        }
        let mut seen = HashSet::new();
        for entry in self.habits.iter() {
            if !seen.insert(entry.id.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "habits".to_string(),
                    message: format!("duplicate habit id '{}'", entry.id),
                });
            }
            if entry.name.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("habits.{}.name", entry.id),
                    message: "must not be empty".to_string(),
                });
            }
        }

        for (habit, profile) in &self.effects {
            self.check_habit("effects", habit.as_str())?;
            let all = std::iter::once(&profile.primary).chain(profile.supporting_effects());
            for spec in all {
                check_finite(&format!("effects.{habit}.{}", spec.metric.as_str()), spec.magnitude)?;
            }
        }

        let mut organ_ids = HashSet::new();
        for organ in &self.organs {
            if !organ_ids.insert(organ.id.as_str()) {
                return Err(duplicate_organ("organs", organ.id.as_str()));
            }
            check_baseline(&format!("organs.{}.baseline", organ.id), organ.baseline)?;
            for (habit, weight) in &organ.vulnerabilities {
                self.check_habit(&format!("organs.{}.vulnerabilities", organ.id), habit.as_str())?;
                check_finite(&format!("organs.{}.vulnerabilities.{habit}", organ.id), *weight)?;
            }
        }

        let mut mechanism_ids = HashSet::new();
        for organ in &self.organ_mechanisms {
            if !mechanism_ids.insert(organ.id.as_str()) {
                return Err(duplicate_organ("organ_mechanisms", organ.id.as_str()));
            }
            check_baseline(&format!("organ_mechanisms.{}.baseline", organ.id), organ.baseline)?;
            if let Some(weight) = organ.body_weight {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(ConfigError::ValidationFailed {
                        field: format!("organ_mechanisms.{}.body_weight", organ.id),
                        message: "must be a non-negative number".to_string(),
                    });
                }
            }
            let lists = [
                ("top_harmful", &organ.top_harmful),
                ("top_beneficial", &organ.top_beneficial),
            ];
            for (list_name, entries) in lists {
                let table = format!("organ_mechanisms.{}.{list_name}", organ.id);
                for entry in entries {
                    self.check_habit(&table, entry.habit.as_str())?;
                    if !entry.impact.is_finite() || entry.impact < 0.0 {
                        return Err(ConfigError::ValidationFailed {
                            field: format!("{table}.{}", entry.habit),
                            message: "impact must be a non-negative number".to_string(),
                        });
                    }
                }
            }
        }

        for (table, habit) in self.recommendations.referenced() {
            self.check_habit(table, habit.as_str())?;
        }
        Ok(())
    }

    /// Vulnerability model profile for an organ.
    pub fn organ(&self, id: &str) -> AtlasResult<&OrganProfile> {
        self.organs
            .iter()
            .find(|o| o.id.as_str() == id)
            .ok_or_else(|| AtlasError::UnknownOrgan { id: id.to_string() })
    }

    /// Mechanism model profile for an organ.
    pub fn organ_mechanism(&self, id: &str) -> AtlasResult<&OrganMechanismProfile> {
        self.organ_mechanisms
            .iter()
            .find(|o| o.id.as_str() == id)
            .ok_or_else(|| AtlasError::UnknownOrgan { id: id.to_string() })
    }

    fn check_habit(&self, table: &str, habit: &str) -> Result<(), ConfigError> {
        if self.habits.contains(habit) {
            Ok(())
        } else {
            Err(ConfigError::UnknownHabitReference {
                table: table.to_string(),
                habit: habit.to_string(),
            })
        }
    }
}

fn check_finite(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must be a finite number".to_string(),
        })
    }
}

fn check_baseline(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=100.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must be between 0 and 100".to_string(),
        })
    }
}

fn duplicate_organ(table: &str, id: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: table.to_string(),
        message: format!("duplicate organ id '{id}'"),
    }
}
