//! Deterministic horde-survival rules shared by the runtime and offline tools.
//!
//! `horde-core` defines the two pieces of game logic that carry real design
//! weight: the stat resolution engine ([`stats`]) and the wave/spawn admission
//! controller ([`spawn`]). Both operate purely on in-memory numeric state and
//! are advanced by an explicit step driven by the host loop. Host collaborators
//! (population, pressure, boss state, spawn boundary, randomness) are reached
//! through the oracle traits in [`env`].
pub mod config;
pub mod env;
pub mod error;
pub mod geometry;
pub mod spawn;
pub mod stats;
pub mod timer;
pub mod vitals;

pub use config::GameConfig;
pub use env::{
    BoundaryOracle, EncounterOracle, Env, FixedBoundary, FixedPressure, OracleError, PcgRng,
    PopulationOracle, PressureOracle, RngOracle, SpawnEnv, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use geometry::{Bounds, Point};
pub use spawn::{
    ActorId, Campaign, ConfigurationError, CountRange, Edge, EventActivation, EventDefinition,
    EventScheduler, ExitConditions, IntervalRange, LiveSet, RunnerPhase, SpawnRequest,
    StepOutcome, Wave, WaveController, WaveEvent, WaveRunnerState, edge_position,
};
pub use stats::{
    Attribute, AttributeBlock, Boost, CategorySet, CombineRule, LevelRange, Modifier,
    ModifierSet, Participant, Progression, Resistances, SourceId, StatCategory, StatError,
    StatProfile, cumulative_curse, cumulative_level, resolve, try_resolve,
};
pub use timer::Countdown;
pub use vitals::{DamageOutcome, HostileVitals, PlayerVitals};
