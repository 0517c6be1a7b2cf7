//! Scalar boosts: a factor applied to the attributes of selected categories.
//!
//! Curse and level scaling are both boosts. Each actor class carries one
//! category set per boost so that different attributes can respond to
//! different global scalars.

use super::attributes::{Attribute, AttributeBlock};
use super::category::CategorySet;

/// A scalar multiplier restricted to a set of categories.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boost {
    pub factor: f32,
    pub categories: CategorySet,
}

impl Boost {
    /// Boost that changes nothing.
    pub const NONE: Self = Self {
        factor: 1.0,
        categories: CategorySet::EMPTY,
    };

    pub const fn new(factor: f32, categories: CategorySet) -> Self {
        Self { factor, categories }
    }

    /// A factor of exactly 1 or 0 means "no boost selected this step".
    ///
    /// Pressure sources floor their scalars at 1, so skipping 0 never hides a
    /// real boost; it only guards against uninitialised providers.
    pub fn is_noop(&self) -> bool {
        self.factor == 1.0 || self.factor == 0.0 || self.categories.is_empty()
    }

    /// Applies the boost to a copy of `block`.
    ///
    /// Selected attributes are multiplied by the factor, except
    /// inverse-scaled ones (knockback) which are divided. Resistances are
    /// multiplied and capped at 1. Unselected attributes pass through.
    #[must_use]
    pub fn apply(&self, block: &AttributeBlock) -> AttributeBlock {
        let mut boosted = *block;
        if self.is_noop() {
            return boosted;
        }
        for attribute in self.categories.attributes() {
            scale_attribute(&mut boosted, attribute, self.factor);
        }
        boosted
    }
}

fn scale_attribute(block: &mut AttributeBlock, attribute: Attribute, factor: f32) {
    let value = block.get_mut(attribute);
    if attribute.is_inverse_scaled() {
        *value /= factor;
    } else if attribute.is_resistance() {
        *value = (*value * factor).min(1.0);
    } else {
        *value *= factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StatCategory;

    #[test]
    fn knockback_is_divided() {
        let base = AttributeBlock::HOSTILE.with(Attribute::KnockbackMultiplier, 2.0);
        let boost = Boost::new(4.0, CategorySet::new().with(StatCategory::KnockbackMultiplier));
        assert_eq!(boost.apply(&base).knockback_multiplier, 0.5);
    }

    #[test]
    fn resistances_cap_at_one() {
        let base = AttributeBlock::HOSTILE.with(Attribute::FreezeResistance, 0.4);
        let boost = Boost::new(3.0, CategorySet::new().with(StatCategory::Resistances));
        let boosted = boost.apply(&base);
        assert_eq!(boosted.resistances.freeze, 1.0);
        assert_eq!(boosted.resistances.kill, 0.0);
    }

    #[test]
    fn zero_and_one_factors_are_skipped() {
        let base = AttributeBlock::HOSTILE;
        let all = CategorySet::all();
        assert_eq!(Boost::new(0.0, all).apply(&base), base);
        assert_eq!(Boost::new(1.0, all).apply(&base), base);
        assert!(Boost::NONE.is_noop());
    }

    #[test]
    fn unselected_fields_pass_through() {
        let base = AttributeBlock::HOSTILE;
        let boost = Boost::new(2.0, CategorySet::new().with(StatCategory::Damage));
        let boosted = boost.apply(&base);
        assert_eq!(boosted.damage, 6.0);
        assert_eq!(boosted.max_health, base.max_health);
        assert_eq!(boosted.move_speed, base.move_speed);
    }
}
