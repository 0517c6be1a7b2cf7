//! Pressure oracle: aggregate difficulty scalars derived from the participants.

/// Exposes the global curse and level scalars.
///
/// Implementations usually aggregate every participant with
/// [`cumulative_curse`](crate::stats::cumulative_curse) and
/// [`cumulative_level`](crate::stats::cumulative_level), both floored at 1.
pub trait PressureOracle: Send + Sync {
    /// Cumulative curse; shortens spawn cooldowns and scales curse-boosted stats.
    fn curse(&self) -> f32;

    /// Cumulative level; scales level-boosted stats.
    fn level(&self) -> f32;
}

/// Constant pressure, useful for tests and for hosts without participants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedPressure {
    pub curse: f32,
    pub level: f32,
}

impl FixedPressure {
    pub const NEUTRAL: Self = Self {
        curse: 1.0,
        level: 1.0,
    };

    pub const fn new(curse: f32, level: f32) -> Self {
        Self { curse, level }
    }
}

impl Default for FixedPressure {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl PressureOracle for FixedPressure {
    fn curse(&self) -> f32 {
        self.curse
    }

    fn level(&self) -> f32 {
        self.level
    }
}
