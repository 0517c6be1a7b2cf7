//! Per-class stat profile: base attributes plus the two boost selections.

use super::attributes::AttributeBlock;
use super::boost::Boost;
use super::category::CategorySet;
use super::modifiers::ModifierSet;
use super::resolve::resolve;

/// What an actor class is made of before any pressure is applied.
///
/// Hostile kinds in the bestiary and the player character are both described
/// by a profile. Curse and level select their categories independently.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatProfile {
    pub base: AttributeBlock,
    pub curse_boosts: CategorySet,
    pub level_boosts: CategorySet,
}

impl StatProfile {
    /// Default hostile: baseline numbers, curse boosts health and move speed.
    pub const HOSTILE: Self = Self {
        base: AttributeBlock::HOSTILE,
        curse_boosts: CategorySet::hostile_curse_default(),
        level_boosts: CategorySet::EMPTY,
    };

    /// Default player: baseline numbers, no pressure scaling.
    pub const PLAYER: Self = Self {
        base: AttributeBlock::PLAYER,
        curse_boosts: CategorySet::EMPTY,
        level_boosts: CategorySet::EMPTY,
    };

    pub const fn new(base: AttributeBlock) -> Self {
        Self {
            base,
            ..Self::HOSTILE
        }
    }

    #[must_use]
    pub const fn with_curse_boosts(mut self, categories: CategorySet) -> Self {
        self.curse_boosts = categories;
        self
    }

    #[must_use]
    pub const fn with_level_boosts(mut self, categories: CategorySet) -> Self {
        self.level_boosts = categories;
        self
    }

    /// The curse boost for this class at the given global curse.
    pub const fn curse_boost(&self, curse: f32) -> Boost {
        Boost::new(curse, self.curse_boosts)
    }

    /// The level boost for this class at the given global level.
    pub const fn level_boost(&self, level: f32) -> Boost {
        Boost::new(level, self.level_boosts)
    }

    /// Resolves effective attributes at the given pressure.
    pub fn resolve(&self, curse: f32, level: f32, modifiers: &ModifierSet) -> AttributeBlock {
        resolve(
            &self.base,
            self.curse_boost(curse),
            self.level_boost(level),
            modifiers,
        )
    }
}

impl Default for StatProfile {
    fn default() -> Self {
        Self::HOSTILE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatCategory;

    #[test]
    fn hostile_default_scales_health_and_speed_with_curse() {
        let effective = StatProfile::HOSTILE.resolve(2.0, 5.0, &ModifierSet::new());
        assert_eq!(effective.max_health, 20.0);
        assert_eq!(effective.move_speed, 2.0);
        assert_eq!(effective.damage, 3.0);
    }

    #[test]
    fn level_selection_is_independent_of_curse() {
        let profile = StatProfile::new(AttributeBlock::hostile(10.0, 1.0, 3.0))
            .with_curse_boosts(CategorySet::new().with(StatCategory::Health))
            .with_level_boosts(CategorySet::new().with(StatCategory::Damage));
        let effective = profile.resolve(2.0, 3.0, &ModifierSet::new());
        assert_eq!(effective.max_health, 20.0);
        assert_eq!(effective.damage, 9.0);
        assert_eq!(effective.move_speed, 1.0);
    }
}
