//! String-backed identifier types for habits and organs.
//!
//! Ids are resolved against the reference data at runtime, so they are
//! newtypes over `String` rather than closed enums. A `HabitId` cannot be
//! accidentally used where an `OrganId` is expected.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[serde(transparent)]
        #[ts(export)]
        pub struct $name(String);

        impl $name {
            /// Create a new id.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(
    /// Catalogue habit identifier (e.g. `smoking`).
    HabitId
);

define_id!(
    /// Organ identifier (e.g. `lungs`).
    OrganId
);

/// Direction of a habit's overall influence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum HabitKind {
    Harmful,
    Beneficial,
}

/// Habit ids of the built-in catalogue that the engine rules refer to by name.
pub mod ids {
    // Harmful
    pub const DRUGS: &str = "drugs";
    pub const SMOKING: &str = "smoking";
    pub const ALCOHOL: &str = "alcohol";
    pub const CHRONIC_STRESS: &str = "chronic_stress";
    pub const PROCESSED_DIET: &str = "processed_diet";
    pub const SEDENTARY: &str = "sedentary";
    pub const SOCIAL_ISOLATION: &str = "social_isolation";
    pub const PORNOGRAPHY: &str = "pornography";
    pub const GAMING: &str = "gaming";
    // Beneficial
    pub const SLEEP_CONSISTENCY: &str = "sleep_consistency";
    pub const EXERCISE: &str = "exercise";
    pub const HEALTHY_DIET: &str = "healthy_diet";
    pub const HYDRATION: &str = "hydration";
    pub const SOCIAL_CONNECTION: &str = "social_connection";
    pub const MEDITATION: &str = "meditation";
    pub const READING: &str = "reading";
    pub const JOURNALING: &str = "journaling";
}

/// Organ ids of the built-in organ models.
pub mod organs {
    pub const LUNGS: &str = "lungs";
    pub const HEART: &str = "heart";
    pub const BRAIN: &str = "brain";
    pub const LIVER: &str = "liver";
    pub const KIDNEYS: &str = "kidneys";
    pub const GUT: &str = "gut";
    pub const SKIN: &str = "skin";
    pub const BLADDER: &str = "bladder";
}
