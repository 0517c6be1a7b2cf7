//! Health bookkeeping for hostiles and players.
//!
//! Vitals hold current health and the timed effects attached to it. Maximum
//! health and the other numbers come from resolved attributes, so callers
//! refresh them with [`HostileVitals::refresh`] / [`PlayerVitals::refresh`]
//! whenever the pressure scalars or modifiers change.

use crate::stats::AttributeBlock;
use crate::timer::Countdown;

/// Result of applying one hit.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DamageOutcome {
    /// Target could not be hurt (invincible, dying or dead).
    Ignored,
    /// An insta-kill was dodged through kill resistance.
    Dodged,
    /// Armor absorbed the whole hit.
    Blocked,
    /// Health was reduced and the target survives.
    Damaged { dealt: f32, remaining: f32 },
    /// The hit brought health to zero or below.
    Killed { dealt: f32 },
}

impl DamageOutcome {
    pub fn is_kill(&self) -> bool {
        matches!(self, Self::Killed { .. })
    }
}

/// Hostile health, damage flash and death fade.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostileVitals {
    pub health: f32,
    pub max_health: f32,
    pub kill_resistance: f32,
    flash: Countdown,
    fade: Countdown,
    dying: bool,
}

impl HostileVitals {
    pub const DAMAGE_FLASH_SECONDS: f32 = 0.2;
    pub const DEATH_FADE_SECONDS: f32 = 0.6;

    /// Full health from resolved attributes.
    pub fn new(effective: &AttributeBlock) -> Self {
        Self {
            health: effective.max_health,
            max_health: effective.max_health,
            kill_resistance: effective.resistances.kill,
            flash: Countdown::IDLE,
            fade: Countdown::IDLE,
            dying: false,
        }
    }

    /// Adopts new resolved attributes; current health is kept.
    pub fn refresh(&mut self, effective: &AttributeBlock) {
        self.max_health = effective.max_health;
        self.kill_resistance = effective.resistances.kill;
    }

    /// Applies `damage`. `roll` is a uniform value in `[0, 1)`.
    ///
    /// Damage exactly equal to max health is an insta-kill attempt: it is
    /// dodged outright when `roll` is below the kill resistance.
    pub fn take_damage(&mut self, damage: f32, roll: f32) -> DamageOutcome {
        if self.dying {
            return DamageOutcome::Ignored;
        }
        if damage == self.max_health && roll < self.kill_resistance {
            return DamageOutcome::Dodged;
        }

        self.health -= damage;
        self.flash.start(Self::DAMAGE_FLASH_SECONDS);

        if self.health <= 0.0 {
            self.dying = true;
            self.fade.start(Self::DEATH_FADE_SECONDS);
            return DamageOutcome::Killed { dealt: damage };
        }
        DamageOutcome::Damaged {
            dealt: damage,
            remaining: self.health,
        }
    }

    /// Advances timed effects. Returns true once the death fade has finished
    /// and the hostile should be removed.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.flash.tick(dt);
        self.fade.tick(dt) && self.dying
    }

    pub fn is_flashing(&self) -> bool {
        self.flash.is_running()
    }

    pub fn is_dying(&self) -> bool {
        self.dying
    }
}

/// Player health, armor, invincibility and recovery.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerVitals {
    pub health: f32,
    pub max_health: f32,
    pub armor: f32,
    pub recovery: f32,
    pub invincibility_seconds: f32,
    invincibility: Countdown,
    dead: bool,
}

impl PlayerVitals {
    pub const DEFAULT_INVINCIBILITY_SECONDS: f32 = 0.5;

    pub fn new(effective: &AttributeBlock) -> Self {
        Self {
            health: effective.max_health,
            max_health: effective.max_health,
            armor: effective.armor,
            recovery: effective.recovery,
            invincibility_seconds: Self::DEFAULT_INVINCIBILITY_SECONDS,
            invincibility: Countdown::IDLE,
            dead: false,
        }
    }

    #[must_use]
    pub fn with_invincibility(mut self, seconds: f32) -> Self {
        self.invincibility_seconds = seconds;
        self
    }

    /// Adopts new resolved attributes; health is capped at the new maximum.
    pub fn refresh(&mut self, effective: &AttributeBlock) {
        self.max_health = effective.max_health;
        self.armor = effective.armor;
        self.recovery = effective.recovery;
        self.health = self.health.min(self.max_health);
    }

    /// Applies a hit. Armor is subtracted first; any hit that is not ignored
    /// starts invincibility, including a fully blocked one.
    pub fn take_damage(&mut self, damage: f32) -> DamageOutcome {
        if self.dead || self.invincibility.is_running() {
            return DamageOutcome::Ignored;
        }

        let dealt = damage - self.armor;
        let outcome = if dealt > 0.0 {
            self.health -= dealt;
            if self.health <= 0.0 {
                self.dead = true;
                DamageOutcome::Killed { dealt }
            } else {
                DamageOutcome::Damaged {
                    dealt,
                    remaining: self.health,
                }
            }
        } else {
            DamageOutcome::Blocked
        };

        self.invincibility.start(self.invincibility_seconds);
        outcome
    }

    /// Advances invincibility and applies recovery.
    pub fn tick(&mut self, dt: f32) {
        self.invincibility.tick(dt);
        if !self.dead && self.health < self.max_health {
            self.health = (self.health + self.recovery * dt).min(self.max_health);
        }
    }

    /// Heals by `amount`, capped at max health. Dead players stay dead.
    pub fn restore_health(&mut self, amount: f32) {
        if self.dead {
            return;
        }
        self.health = (self.health + amount).min(self.max_health);
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility.is_running()
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }
}
