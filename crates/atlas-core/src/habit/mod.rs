//! Habit identifiers, levels and selections.

pub mod identifiers;
pub mod level;
pub mod selection;

pub use identifiers::{ids, organs, HabitId, HabitKind, OrganId};
pub use level::Level;
pub use selection::HabitSelection;
