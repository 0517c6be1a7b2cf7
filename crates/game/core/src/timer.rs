//! Countdown timers for timed effects.
//!
//! Every timed effect (damage flash, death fade, invincibility, event
//! durations) is a countdown field ticked by the owner's `advance(dt)`.

/// A countdown that is either idle or running down to zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Countdown {
    remaining: f32,
}

impl Countdown {
    pub const IDLE: Self = Self { remaining: 0.0 };

    /// A countdown already running for `seconds`.
    pub const fn started(seconds: f32) -> Self {
        Self { remaining: seconds }
    }

    /// Restarts the countdown, replacing any time left.
    pub fn start(&mut self, seconds: f32) {
        self.remaining = seconds.max(0.0);
    }

    pub fn cancel(&mut self) {
        self.remaining = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.remaining > 0.0
    }

    pub fn remaining(&self) -> f32 {
        self.remaining.max(0.0)
    }

    /// Advances by `dt`. Returns true on the step the countdown reaches zero.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.is_running() {
            return false;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_when_elapsed() {
        let mut timer = Countdown::started(0.2);
        assert!(!timer.tick(0.1));
        assert!(timer.tick(0.15));
        assert!(!timer.is_running());
        assert!(!timer.tick(1.0));
    }

    #[test]
    fn idle_never_fires() {
        let mut timer = Countdown::IDLE;
        assert!(!timer.tick(5.0));
        timer.start(-1.0);
        assert!(!timer.is_running());
    }
}
