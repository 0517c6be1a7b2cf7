//! Effective-attribute resolution.
//!
//! ```text
//! base ──curse boost──▶ ──level boost──▶ ──modifiers (in order)──▶ clamp ──▶ effective
//! ```
//!
//! Resolution is a pure function of its inputs. Callers re-resolve whenever
//! the pressure scalars or the modifier set change; nothing is cached here.

use super::attributes::AttributeBlock;
use super::boost::Boost;
use super::error::StatError;
use super::modifiers::ModifierSet;

/// Computes effective attributes.
///
/// 1. `curse` scales the attributes of its selected categories.
/// 2. `level` scales the result of step 1 the same way.
/// 3. `modifiers` are folded in insertion order.
/// 4. Resistances are clamped to `[0, 1]`.
///
/// A factor of exactly 0 or 1 skips its boost. Negative non-resistance
/// values are left as they are. Non-finite factors are not sanitized; use
/// [`try_resolve`] when the factors come from untrusted input.
pub fn resolve(
    base: &AttributeBlock,
    curse: Boost,
    level: Boost,
    modifiers: &ModifierSet,
) -> AttributeBlock {
    let cursed = curse.apply(base);
    let levelled = level.apply(&cursed);
    modifiers.fold(&levelled).clamp_resistances()
}

/// [`resolve`] with both boost factors validated first.
pub fn try_resolve(
    base: &AttributeBlock,
    curse: Boost,
    level: Boost,
    modifiers: &ModifierSet,
) -> Result<AttributeBlock, StatError> {
    validate_factor(curse.factor)?;
    validate_factor(level.factor)?;
    Ok(resolve(base, curse, level, modifiers))
}

/// Rejects NaN and infinite factors.
pub fn validate_factor(factor: f32) -> Result<f32, StatError> {
    if factor.is_finite() {
        Ok(factor)
    } else {
        Err(StatError::InvalidStatFactor { factor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{Attribute, CategorySet, Modifier, SourceId, StatCategory};

    fn health_only() -> CategorySet {
        CategorySet::new().with(StatCategory::Health)
    }

    #[test]
    fn curse_then_level_multiply_health() {
        let base = AttributeBlock::HOSTILE;
        let effective = resolve(
            &base,
            Boost::new(2.0, health_only()),
            Boost::new(3.0, health_only()),
            &ModifierSet::new(),
        );
        assert_eq!(effective.max_health, 60.0);
        assert_eq!(effective.move_speed, base.move_speed);
        assert_eq!(effective.damage, base.damage);
    }

    #[test]
    fn knockback_is_divided_by_each_boost() {
        let base = AttributeBlock::HOSTILE.with(Attribute::KnockbackMultiplier, 6.0);
        let knockback = CategorySet::new().with(StatCategory::KnockbackMultiplier);
        let effective = resolve(
            &base,
            Boost::new(2.0, knockback),
            Boost::new(3.0, knockback),
            &ModifierSet::new(),
        );
        assert_eq!(effective.knockback_multiplier, 1.0);
    }

    #[test]
    fn resistances_are_clamped_after_modifiers() {
        let base = AttributeBlock::HOSTILE.with(Attribute::KillResistance, 0.5);
        let mut modifiers = ModifierSet::new();
        modifiers.push(
            Modifier::additive(SourceId(1))
                .with(Attribute::KillResistance, 0.9)
                .with(Attribute::FreezeResistance, -0.4),
        );
        let effective = resolve(&base, Boost::NONE, Boost::NONE, &modifiers);
        assert_eq!(effective.resistances.kill, 1.0);
        assert_eq!(effective.resistances.freeze, 0.0);
    }

    #[test]
    fn unselected_categories_pass_through_unchanged() {
        let base = AttributeBlock::PLAYER;
        let effective = resolve(
            &base,
            Boost::new(5.0, CategorySet::EMPTY),
            Boost::new(7.0, CategorySet::EMPTY),
            &ModifierSet::new(),
        );
        assert_eq!(effective, base);
    }

    #[test]
    fn negative_values_are_not_floored() {
        let mut modifiers = ModifierSet::new();
        modifiers.push(Modifier::additive(SourceId(3)).with(Attribute::Armor, -4.0));
        let effective = resolve(&AttributeBlock::PLAYER, Boost::NONE, Boost::NONE, &modifiers);
        assert_eq!(effective.armor, -4.0);
    }

    #[test]
    fn try_resolve_rejects_non_finite_factors() {
        let base = AttributeBlock::HOSTILE;
        let err = try_resolve(
            &base,
            Boost::new(f32::INFINITY, health_only()),
            Boost::NONE,
            &ModifierSet::new(),
        )
        .unwrap_err();
        assert!(matches!(err, StatError::InvalidStatFactor { .. }));
        assert!(validate_factor(f32::NAN).is_err());
        assert_eq!(validate_factor(2.5), Ok(2.5));
    }
}
