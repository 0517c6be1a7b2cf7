//! Frame-stepped host for the horde simulation.
//!
//! This crate owns the mutable world that `horde-core` only reasons about:
//! live hostiles, the player, the camera and the boss encounter. Consumers
//! build a [`Session`] from loaded content, call [`Session::advance`] once per
//! frame and react to the [`SessionEvent`]s it raises.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the step loop, its builder and configuration
//! - [`oracle`] implements the core oracle traits over the world
//! - [`event`] defines what a session reports back
//! - [`report`] summarizes a run as JSON
pub mod error;
pub mod event;
pub mod oracle;
pub mod player;
pub mod report;
pub mod session;

pub use error::{Result, RuntimeError};
pub use event::{SessionEvent, SpawnSource};
pub use oracle::{BossEncounter, Hostile, HostileRoster, PressureGauge, Viewport, World};
pub use player::Player;
pub use report::RunReport;
pub use session::{
    COMBAT_STREAM, PLACEMENT_STREAM, RuntimeConfig, Session, SessionBuilder, SessionStatus,
};
