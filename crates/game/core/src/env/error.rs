//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors that occur when an oracle is missing from the environment.
///
/// The controller cannot run without its collaborators, so every variant is
/// fatal: the controller disables itself until it is reconfigured.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// PopulationOracle is not available in the environment.
    #[error("PopulationOracle not available")]
    PopulationNotAvailable,

    /// PressureOracle is not available in the environment.
    #[error("PressureOracle not available")]
    PressureNotAvailable,

    /// EncounterOracle is not available in the environment.
    #[error("EncounterOracle not available")]
    EncounterNotAvailable,

    /// BoundaryOracle is not available in the environment.
    #[error("BoundaryOracle not available")]
    BoundaryNotAvailable,

    /// RngOracle is not available in the environment.
    #[error("RngOracle not available")]
    RngNotAvailable,
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            PopulationNotAvailable => "ORACLE_POPULATION_NOT_AVAILABLE",
            PressureNotAvailable => "ORACLE_PRESSURE_NOT_AVAILABLE",
            EncounterNotAvailable => "ORACLE_ENCOUNTER_NOT_AVAILABLE",
            BoundaryNotAvailable => "ORACLE_BOUNDARY_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
        }
    }
}
