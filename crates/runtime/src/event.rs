//! Events emitted by a [`Session`](crate::Session).
//!
//! Wave controller events pass through unchanged inside
//! [`SessionEvent::Wave`]; everything else is raised by the session itself.
//! Events queue up in emission order until the client drains them.

use horde_core::{ActorId, Point, WaveEvent};
use serde::{Deserialize, Serialize};

/// Why a hostile entered the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnSource {
    Wave,
    Event,
    Boss,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Raised by the wave controller.
    Wave(WaveEvent),

    HostileSpawned {
        id: ActorId,
        kind: String,
        position: Point,
        source: SpawnSource,
    },

    /// Health reached zero; the hostile fades out before it is removed.
    HostileKilled {
        id: ActorId,
        kind: String,
        experience: u32,
    },

    /// The hostile left the world, either after its death fade or because
    /// the arena was cleared for the boss.
    HostileRemoved { id: ActorId },

    /// A timed event started activating.
    EventActivated {
        name: String,
        kind: String,
        count: u32,
    },

    LevelUp { level: u32 },

    PlayerDied,

    BossFightStarted { id: ActorId, kind: String },

    Victory,
}

impl From<WaveEvent> for SessionEvent {
    fn from(event: WaveEvent) -> Self {
        Self::Wave(event)
    }
}
