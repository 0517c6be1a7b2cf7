//! Attribute blocks: the value aggregate every stat computation works on.
//!
//! An [`AttributeBlock`] is a plain copyable struct of named `f32` fields.
//! Each scalar field is also addressable through the [`Attribute`] enum so
//! that category dispatch and modifier folding never hard-code field access.

use core::ops::Add;

/// Every scalar field of an [`AttributeBlock`], in declaration order.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Attribute {
    MaxHealth,
    MoveSpeed,
    Damage,
    KnockbackMultiplier,
    FreezeResistance,
    KillResistance,
    DebuffResistance,
    Recovery,
    Armor,
    Might,
    Area,
    ProjectileSpeed,
    Duration,
    Amount,
    Cooldown,
    Luck,
    Growth,
    Greed,
    Curse,
    Magnet,
    BaseDamage,
}

impl Attribute {
    /// Resistances are probabilities and live in `[0, 1]`.
    pub const fn is_resistance(self) -> bool {
        matches!(
            self,
            Self::FreezeResistance | Self::KillResistance | Self::DebuffResistance
        )
    }

    /// Boosts divide rather than multiply these attributes: more pressure
    /// means hostiles get knocked back less.
    pub const fn is_inverse_scaled(self) -> bool {
        matches!(self, Self::KnockbackMultiplier)
    }
}

/// Resistance triple. Each value is a probability in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Resistances {
    pub freeze: f32,
    pub kill: f32,
    pub debuff: f32,
}

impl Resistances {
    pub const NONE: Self = Self {
        freeze: 0.0,
        kill: 0.0,
        debuff: 0.0,
    };

    pub const fn new(freeze: f32, kill: f32, debuff: f32) -> Self {
        Self {
            freeze,
            kill,
            debuff,
        }
    }

    /// Multiplies every resistance, capping at 1.
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        Self {
            freeze: (self.freeze * factor).min(1.0),
            kill: (self.kill * factor).min(1.0),
            debuff: (self.debuff * factor).min(1.0),
        }
    }

    /// Clamps every resistance to `[0, 1]`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            freeze: self.freeze.clamp(0.0, 1.0),
            kill: self.kill.clamp(0.0, 1.0),
            debuff: self.debuff.clamp(0.0, 1.0),
        }
    }
}

impl Add for Resistances {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            freeze: (self.freeze + rhs.freeze).min(1.0),
            kill: (self.kill + rhs.kill).min(1.0),
            debuff: (self.debuff + rhs.debuff).min(1.0),
        }
    }
}

/// Named numeric attributes of an actor.
///
/// Hostiles mostly use the first block of fields (health, speed, damage,
/// knockback, resistances); players use the rest as well. Unused fields stay
/// at zero. `Default` is the all-zero block, which is also the identity for
/// `+`, so passive deltas can be written as sparse blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AttributeBlock {
    pub max_health: f32,
    pub move_speed: f32,
    pub damage: f32,
    pub knockback_multiplier: f32,
    pub resistances: Resistances,

    pub recovery: f32,
    pub armor: f32,
    pub might: f32,
    pub area: f32,
    pub projectile_speed: f32,
    pub duration: f32,
    pub amount: f32,
    pub cooldown: f32,
    pub luck: f32,
    pub growth: f32,
    pub greed: f32,
    pub curse: f32,
    pub magnet: f32,
    pub base_damage: f32,
}

impl AttributeBlock {
    pub const ZERO: Self = Self {
        max_health: 0.0,
        move_speed: 0.0,
        damage: 0.0,
        knockback_multiplier: 0.0,
        resistances: Resistances::NONE,
        recovery: 0.0,
        armor: 0.0,
        might: 0.0,
        area: 0.0,
        projectile_speed: 0.0,
        duration: 0.0,
        amount: 0.0,
        cooldown: 0.0,
        luck: 0.0,
        growth: 0.0,
        greed: 0.0,
        curse: 0.0,
        magnet: 0.0,
        base_damage: 0.0,
    };

    /// Baseline hostile: 10 health, speed 1, 3 damage, neutral knockback.
    pub const HOSTILE: Self = Self {
        max_health: 10.0,
        move_speed: 1.0,
        damage: 3.0,
        knockback_multiplier: 1.0,
        ..Self::ZERO
    };

    /// Baseline player: multiplicative stats at 1, a modest pickup radius.
    pub const PLAYER: Self = Self {
        max_health: 100.0,
        move_speed: 1.0,
        knockback_multiplier: 1.0,
        might: 1.0,
        area: 1.0,
        projectile_speed: 1.0,
        duration: 1.0,
        cooldown: 1.0,
        luck: 1.0,
        growth: 1.0,
        greed: 1.0,
        curse: 1.0,
        magnet: 30.0,
        base_damage: 5.0,
        ..Self::ZERO
    };

    /// Hostile block with the given core combat numbers.
    pub const fn hostile(max_health: f32, move_speed: f32, damage: f32) -> Self {
        Self {
            max_health,
            move_speed,
            damage,
            ..Self::HOSTILE
        }
    }

    /// Reads one attribute.
    pub fn get(&self, attribute: Attribute) -> f32 {
        match attribute {
            Attribute::MaxHealth => self.max_health,
            Attribute::MoveSpeed => self.move_speed,
            Attribute::Damage => self.damage,
            Attribute::KnockbackMultiplier => self.knockback_multiplier,
            Attribute::FreezeResistance => self.resistances.freeze,
            Attribute::KillResistance => self.resistances.kill,
            Attribute::DebuffResistance => self.resistances.debuff,
            Attribute::Recovery => self.recovery,
            Attribute::Armor => self.armor,
            Attribute::Might => self.might,
            Attribute::Area => self.area,
            Attribute::ProjectileSpeed => self.projectile_speed,
            Attribute::Duration => self.duration,
            Attribute::Amount => self.amount,
            Attribute::Cooldown => self.cooldown,
            Attribute::Luck => self.luck,
            Attribute::Growth => self.growth,
            Attribute::Greed => self.greed,
            Attribute::Curse => self.curse,
            Attribute::Magnet => self.magnet,
            Attribute::BaseDamage => self.base_damage,
        }
    }

    /// Mutable access to one attribute.
    pub fn get_mut(&mut self, attribute: Attribute) -> &mut f32 {
        match attribute {
            Attribute::MaxHealth => &mut self.max_health,
            Attribute::MoveSpeed => &mut self.move_speed,
            Attribute::Damage => &mut self.damage,
            Attribute::KnockbackMultiplier => &mut self.knockback_multiplier,
            Attribute::FreezeResistance => &mut self.resistances.freeze,
            Attribute::KillResistance => &mut self.resistances.kill,
            Attribute::DebuffResistance => &mut self.resistances.debuff,
            Attribute::Recovery => &mut self.recovery,
            Attribute::Armor => &mut self.armor,
            Attribute::Might => &mut self.might,
            Attribute::Area => &mut self.area,
            Attribute::ProjectileSpeed => &mut self.projectile_speed,
            Attribute::Duration => &mut self.duration,
            Attribute::Amount => &mut self.amount,
            Attribute::Cooldown => &mut self.cooldown,
            Attribute::Luck => &mut self.luck,
            Attribute::Growth => &mut self.growth,
            Attribute::Greed => &mut self.greed,
            Attribute::Curse => &mut self.curse,
            Attribute::Magnet => &mut self.magnet,
            Attribute::BaseDamage => &mut self.base_damage,
        }
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, attribute: Attribute, value: f32) -> Self {
        *self.get_mut(attribute) = value;
        self
    }

    /// Clamps the resistance triple to `[0, 1]`, leaving other fields alone.
    #[must_use]
    pub fn clamp_resistances(mut self) -> Self {
        self.resistances = self.resistances.clamped();
        self
    }
}

impl Add for AttributeBlock {
    type Output = Self;

    /// Field-wise sum; resistances cap at 1.
    fn add(self, rhs: Self) -> Self {
        Self {
            max_health: self.max_health + rhs.max_health,
            move_speed: self.move_speed + rhs.move_speed,
            damage: self.damage + rhs.damage,
            knockback_multiplier: self.knockback_multiplier + rhs.knockback_multiplier,
            resistances: self.resistances + rhs.resistances,
            recovery: self.recovery + rhs.recovery,
            armor: self.armor + rhs.armor,
            might: self.might + rhs.might,
            area: self.area + rhs.area,
            projectile_speed: self.projectile_speed + rhs.projectile_speed,
            duration: self.duration + rhs.duration,
            amount: self.amount + rhs.amount,
            cooldown: self.cooldown + rhs.cooldown,
            luck: self.luck + rhs.luck,
            growth: self.growth + rhs.growth,
            greed: self.greed + rhs.greed,
            curse: self.curse + rhs.curse,
            magnet: self.magnet + rhs.magnet,
            base_damage: self.base_damage + rhs.base_damage,
        }
    }
}
