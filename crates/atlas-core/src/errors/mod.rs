//! Error handling for Atlas.
//! One error enum per concern, `thiserror` only.

pub mod atlas_error;
pub mod config_error;
pub mod error_code;
pub mod level_error;

pub use atlas_error::{AtlasError, AtlasResult};
pub use config_error::ConfigError;
pub use error_code::AtlasErrorCode;
pub use level_error::LevelError;
