//! Live hostiles owned by the session.
use std::collections::BTreeMap;

use horde_core::{
    ActorId, AttributeBlock, HostileVitals, ModifierSet, Point, PopulationOracle, StatProfile,
};

/// A hostile instantiated from a bestiary kind.
///
/// Attributes are resolved once, at spawn, against the pressure of that
/// moment.
#[derive(Clone, Debug, PartialEq)]
pub struct Hostile {
    pub id: ActorId,
    pub kind: String,
    pub position: Point,
    pub attributes: AttributeBlock,
    pub vitals: HostileVitals,
    pub experience: u32,
}

/// Every hostile currently present, including dying ones.
#[derive(Clone, Debug, Default)]
pub struct HostileRoster {
    hostiles: BTreeMap<ActorId, Hostile>,
    next_id: u64,
}

impl HostileRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantiates a hostile and returns its fresh id.
    pub fn spawn(
        &mut self,
        kind: &str,
        position: Point,
        profile: &StatProfile,
        experience: u32,
        pressure: (f32, f32),
    ) -> ActorId {
        let (curse, level) = pressure;
        let id = ActorId(self.next_id);
        self.next_id += 1;

        let attributes = profile.resolve(curse, level, &ModifierSet::new());
        self.hostiles.insert(
            id,
            Hostile {
                id,
                kind: kind.to_owned(),
                position,
                attributes,
                vitals: HostileVitals::new(&attributes),
                experience,
            },
        );
        id
    }

    pub fn get(&self, id: ActorId) -> Option<&Hostile> {
        self.hostiles.get(&id)
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Hostile> {
        self.hostiles.get_mut(&id)
    }

    pub fn remove(&mut self, id: ActorId) -> Option<Hostile> {
        self.hostiles.remove(&id)
    }

    /// Removes everything except `keep`, returning the removed ids.
    pub fn clear_except(&mut self, keep: Option<ActorId>) -> Vec<ActorId> {
        let removed: Vec<ActorId> = self
            .hostiles
            .keys()
            .copied()
            .filter(|id| Some(*id) != keep)
            .collect();
        for id in &removed {
            self.hostiles.remove(id);
        }
        removed
    }

    /// Ticks every hostile and returns the ids whose death fade completed.
    pub fn tick(&mut self, dt: f32) -> Vec<ActorId> {
        self.hostiles
            .values_mut()
            .filter_map(|hostile| hostile.vitals.tick(dt).then_some(hostile.id))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Hostile> {
        self.hostiles.values()
    }

    pub fn len(&self) -> usize {
        self.hostiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hostiles.is_empty()
    }

    /// Total number of hostiles ever spawned.
    pub fn spawned_total(&self) -> u64 {
        self.next_id
    }
}

impl PopulationOracle for HostileRoster {
    fn population(&self) -> u32 {
        u32::try_from(self.hostiles.len()).unwrap_or(u32::MAX)
    }

    fn is_alive(&self, actor: ActorId) -> bool {
        self.hostiles.contains_key(&actor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn faded_hostiles_are_reported_once() {
        let mut roster = HostileRoster::new();
        let id = roster.spawn("bat", Point::ORIGIN, &StatProfile::HOSTILE, 1, (1.0, 1.0));
        assert!(roster.is_alive(id));
        assert_eq!(roster.population(), 1);

        let max = roster.get(id).map(|h| h.vitals.max_health).unwrap_or_default();
        if let Some(hostile) = roster.get_mut(id) {
            hostile.vitals.take_damage(max * 2.0, 1.0);
        }
        assert!(roster.tick(0.3).is_empty());
        assert_eq!(roster.tick(0.4), vec![id]);
    }

    #[test]
    fn clear_keeps_the_boss() {
        let mut roster = HostileRoster::new();
        let a = roster.spawn("bat", Point::ORIGIN, &StatProfile::HOSTILE, 1, (1.0, 1.0));
        let boss = roster.spawn("reaper", Point::ORIGIN, &StatProfile::HOSTILE, 0, (1.0, 1.0));
        assert_eq!(roster.clear_except(Some(boss)), vec![a]);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.spawned_total(), 2);
    }
}
