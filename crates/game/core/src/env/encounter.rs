/// Reports encounter-level signals that gate the spawn controller.
pub trait EncounterOracle: Send + Sync {
    /// While true the controller is suspended: no timers advance and no
    /// transitions happen until the signal clears.
    fn boss_fight_active(&self) -> bool;
}

impl EncounterOracle for bool {
    fn boss_fight_active(&self) -> bool {
        *self
    }
}
