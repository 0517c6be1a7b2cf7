//! Stat resolution errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors reported by [`try_resolve`](super::try_resolve) and
/// [`validate_factor`](super::validate_factor).
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatError {
    /// A boost factor was NaN or infinite.
    #[error("invalid stat factor {factor}: boost factors must be finite")]
    InvalidStatFactor { factor: f32 },
}

impl GameError for StatError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidStatFactor { .. } => "STAT_INVALID_FACTOR",
        }
    }
}
