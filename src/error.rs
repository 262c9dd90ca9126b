//! Error types for engine configuration and algorithm selection.
//!
//! Sorting itself never fails; these errors only arise where parameters enter
//! the crate.

use thiserror::Error;

/// Result type alias for fallible engine operations.
pub type Result<T> = std::result::Result<T, SortError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// A configuration value is out of range or inconsistent with another.
    #[error("Invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// The parameter name
        parameter: String,
        /// Explanation of why it's invalid
        reason: String,
    },

    /// No algorithm goes by this name.
    #[error("Unknown algorithm '{0}'")]
    UnknownAlgorithm(String),
}

impl SortError {
    pub(crate) fn invalid(parameter: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter: parameter.to_string(),
            reason: reason.into(),
        }
    }
}
