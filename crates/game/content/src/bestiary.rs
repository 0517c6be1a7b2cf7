//! Hostile kinds: spawn-pool names mapped to stat profiles.

use std::collections::BTreeMap;

use horde_core::{AttributeBlock, CategorySet, Resistances, StatProfile};

/// Authoring form of a hostile kind.
///
/// Omitted numbers fall back to the baseline hostile (10 health, speed 1,
/// 3 damage, neutral knockback) and omitted curse boosts to health and move
/// speed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HostileSpec {
    pub max_health: f32,
    pub move_speed: f32,
    pub damage: f32,
    pub knockback_multiplier: f32,
    pub resistances: Resistances,
    pub curse_boosts: CategorySet,
    pub level_boosts: CategorySet,
    /// Experience granted to the player on elimination.
    pub experience: u32,
}

impl Default for HostileSpec {
    fn default() -> Self {
        let base = AttributeBlock::HOSTILE;
        Self {
            max_health: base.max_health,
            move_speed: base.move_speed,
            damage: base.damage,
            knockback_multiplier: base.knockback_multiplier,
            resistances: base.resistances,
            curse_boosts: CategorySet::hostile_curse_default(),
            level_boosts: CategorySet::EMPTY,
            experience: 1,
        }
    }
}

impl HostileSpec {
    pub fn profile(&self) -> StatProfile {
        let base = AttributeBlock {
            max_health: self.max_health,
            move_speed: self.move_speed,
            damage: self.damage,
            knockback_multiplier: self.knockback_multiplier,
            resistances: self.resistances.clamped(),
            ..AttributeBlock::HOSTILE
        };
        StatProfile::new(base)
            .with_curse_boosts(self.curse_boosts)
            .with_level_boosts(self.level_boosts)
    }
}

/// Catalog of hostile kinds keyed by spawn-pool name.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Bestiary {
    kinds: BTreeMap<String, HostileSpec>,
}

impl Bestiary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: impl Into<String>, spec: HostileSpec) {
        self.kinds.insert(kind.into(), spec);
    }

    pub fn get(&self, kind: &str) -> Option<&HostileSpec> {
        self.kinds.get(kind)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.kinds.contains_key(kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.kinds.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Kinds referenced by `pool` that have no entry here.
    pub fn missing<'p>(&self, pool: impl IntoIterator<Item = &'p str>) -> Vec<&'p str> {
        pool.into_iter().filter(|kind| !self.contains(kind)).collect()
    }
}

impl FromIterator<(String, HostileSpec)> for Bestiary {
    fn from_iter<I: IntoIterator<Item = (String, HostileSpec)>>(iter: I) -> Self {
        Self {
            kinds: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horde_core::ModifierSet;

    #[test]
    fn spec_defaults_match_baseline_hostile() {
        let profile = HostileSpec::default().profile();
        assert_eq!(profile, StatProfile::HOSTILE);
    }

    #[test]
    fn missing_kinds_are_reported() {
        let mut bestiary = Bestiary::new();
        bestiary.insert("bat", HostileSpec::default());
        assert_eq!(bestiary.missing(["bat", "ghoul"]), vec!["ghoul"]);

        let bat = bestiary.get("bat").map(HostileSpec::profile);
        let effective = bat.map(|p| p.resolve(3.0, 1.0, &ModifierSet::new()));
        assert_eq!(effective.map(|e| e.max_health), Some(30.0));
    }
}
