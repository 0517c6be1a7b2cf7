//! Actors spawned by the controller that have not been eliminated yet.

use std::collections::BTreeSet;

/// Host-assigned handle of a spawned actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u64);

impl core::fmt::Display for ActorId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

/// Set of actor ids the controller is waiting on.
///
/// The controller never owns the actors. Entries are removed eagerly on
/// elimination notices and lazily by [`LiveSet::purge`] for anything the
/// host forgot to report.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiveSet {
    ids: BTreeSet<ActorId>,
}

impl LiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the id was already tracked.
    pub fn track(&mut self, id: ActorId) -> bool {
        self.ids.insert(id)
    }

    /// Returns false if the id was not tracked.
    pub fn remove(&mut self, id: ActorId) -> bool {
        self.ids.remove(&id)
    }

    pub fn contains(&self, id: ActorId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.ids.iter().copied()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drops every id for which `is_alive` is false. Returns how many went.
    pub fn purge(&mut self, mut is_alive: impl FnMut(ActorId) -> bool) -> usize {
        let before = self.ids.len();
        self.ids.retain(|id| is_alive(*id));
        before - self.ids.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purge_removes_only_dead_ids() {
        let mut live = LiveSet::new();
        for id in 1..=4 {
            assert!(live.track(ActorId(id)));
        }
        assert!(!live.track(ActorId(2)));

        let removed = live.purge(|id| id.0 % 2 == 0);
        assert_eq!(removed, 2);
        assert_eq!(live.iter().collect::<Vec<_>>(), vec![ActorId(2), ActorId(4)]);
        assert!(live.remove(ActorId(4)));
        assert!(!live.remove(ActorId(4)));
    }
}
