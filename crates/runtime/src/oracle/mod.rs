//! Runtime implementations of the `horde-core` oracle traits.
//!
//! The session owns one [`World`]: the live hostile roster, the pressure
//! gauge, the boss encounter and the camera viewport. Each step it lends the
//! world to the wave controller as a [`SpawnEnv`] snapshot.
mod encounter;
mod pressure;
mod roster;
mod viewport;

use horde_core::{Env, PcgRng, SpawnEnv};

pub use encounter::BossEncounter;
pub use pressure::PressureGauge;
pub use roster::{Hostile, HostileRoster};
pub use viewport::Viewport;

/// Everything the wave controller may ask the host about.
#[derive(Clone, Debug)]
pub struct World {
    pub roster: HostileRoster,
    pub pressure: PressureGauge,
    pub encounter: BossEncounter,
    pub viewport: Viewport,
    pub(crate) rng: PcgRng,
}

impl World {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            roster: HostileRoster::new(),
            pressure: PressureGauge::default(),
            encounter: BossEncounter::default(),
            viewport,
            rng: PcgRng, // PcgRng is stateless
        }
    }

    /// Borrows the world as the controller's environment.
    pub fn as_spawn_env(&self) -> SpawnEnv<'_> {
        Env::with_all(
            &self.roster,
            &self.pressure,
            &self.encounter,
            &self.viewport,
            &self.rng,
        )
        .as_spawn_env()
    }

    pub fn rng(&self) -> &PcgRng {
        &self.rng
    }
}
