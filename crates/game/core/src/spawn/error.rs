//! Configuration errors that disable the wave controller.

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};

/// Why a campaign cannot run.
///
/// Surfaced once through [`WaveEvent::Disabled`](super::WaveEvent::Disabled);
/// the controller then stays disabled until its state is reset.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfigurationError {
    #[error("campaign has no waves")]
    EmptyWaveTable,

    #[error("wave {wave} has an empty spawn pool")]
    EmptySpawnPool { wave: usize },

    #[error("wave {wave} selects no exit condition and would end immediately")]
    NoExitCondition { wave: usize },

    #[error("wave {wave} exit conditions already hold when it starts")]
    ImmediateExit { wave: usize },

    #[error("wave {wave} is invalid: {reason}")]
    InvalidWave { wave: usize, reason: String },

    #[error("missing collaborator: {0}")]
    MissingCollaborator(#[from] OracleError),

    #[error("spawn boundary is missing or degenerate")]
    InvalidSpawnBoundary,
}

impl GameError for ConfigurationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyWaveTable => "SPAWN_EMPTY_WAVE_TABLE",
            Self::EmptySpawnPool { .. } => "SPAWN_EMPTY_SPAWN_POOL",
            Self::NoExitCondition { .. } => "SPAWN_NO_EXIT_CONDITION",
            Self::ImmediateExit { .. } => "SPAWN_IMMEDIATE_EXIT",
            Self::InvalidWave { .. } => "SPAWN_INVALID_WAVE",
            Self::MissingCollaborator(inner) => inner.error_code(),
            Self::InvalidSpawnBoundary => "SPAWN_INVALID_BOUNDARY",
        }
    }
}
