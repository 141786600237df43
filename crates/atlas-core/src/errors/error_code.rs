//! AtlasErrorCode trait for the UI boundary.

/// Every error enum implements this to provide a stable code string the UI
/// layer can switch on without parsing messages.
pub trait AtlasErrorCode {
    /// Returns the error code string (e.g., "INVALID_LEVEL").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn boundary_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_LEVEL: &str = "INVALID_LEVEL";
pub const UNKNOWN_HABIT: &str = "UNKNOWN_HABIT";
pub const UNKNOWN_ORGAN: &str = "UNKNOWN_ORGAN";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
