use horde_core::{ActorId, EncounterOracle};

/// Boss encounter bookkeeping. Only one boss ever appears per run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BossEncounter {
    boss: Option<ActorId>,
    defeated: bool,
}

impl BossEncounter {
    pub fn begin(&mut self, boss: ActorId) {
        self.boss = Some(boss);
        self.defeated = false;
    }

    pub fn conclude(&mut self) {
        self.defeated = true;
    }

    pub fn boss(&self) -> Option<ActorId> {
        self.boss
    }

    pub fn has_spawned(&self) -> bool {
        self.boss.is_some()
    }

    pub fn is_boss(&self, id: ActorId) -> bool {
        self.boss == Some(id)
    }
}

impl EncounterOracle for BossEncounter {
    fn boss_fight_active(&self) -> bool {
        self.boss.is_some() && !self.defeated
    }
}
