//! Population oracle: how many hostiles are alive, and which ones.

use crate::spawn::ActorId;

/// Read-only view of the host's hostile population.
pub trait PopulationOracle: Send + Sync {
    /// Number of live hostiles in the world, regardless of who spawned them.
    fn population(&self) -> u32;

    /// Whether the actor is still alive. Eliminated or unknown ids are not.
    fn is_alive(&self, actor: ActorId) -> bool;
}
