//! Wave/spawn admission.
//!
//! A [`Campaign`] is an ordered list of [`Wave`]s. The host keeps one
//! [`WaveRunnerState`] per campaign and, every frame, lends it to a
//! [`WaveController`] together with the frame's [`SpawnEnv`](crate::env::SpawnEnv).
//! The controller answers with [`SpawnRequest`]s for the host to instantiate
//! and [`WaveEvent`]s describing what changed.
//!
//! Timed special events ([`EventScheduler`]) run beside the campaign and are
//! driven by the host separately.

mod controller;
mod error;
mod events;
mod live;
mod placement;
mod runner;
mod wave;

pub use controller::{SPAWN_STREAM, SpawnRequest, StepOutcome, WaveController, WaveEvent};
pub use error::ConfigurationError;
pub use events::{EVENT_STREAM, EventActivation, EventDefinition, EventScheduler};
pub use live::{ActorId, LiveSet};
pub use placement::{Edge, edge_position};
pub use runner::{RunnerPhase, WaveRunnerState};
pub use wave::{Campaign, CountRange, ExitConditions, IntervalRange, Wave};
