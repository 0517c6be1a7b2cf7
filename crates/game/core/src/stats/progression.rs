//! Experience and level progression.
//!
//! The experience cap grows by the increase of the level range containing
//! the new level after each level-up. Levels outside every range keep the
//! current cap.

/// Inclusive level band with its experience-cap increase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelRange {
    pub start_level: u32,
    pub end_level: u32,
    pub cap_increase: u32,
}

impl LevelRange {
    pub const fn new(start_level: u32, end_level: u32, cap_increase: u32) -> Self {
        Self {
            start_level,
            end_level,
            cap_increase,
        }
    }

    pub const fn contains(&self, level: u32) -> bool {
        level >= self.start_level && level <= self.end_level
    }
}

/// Player experience, level and current experience cap.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progression {
    pub experience: u32,
    pub level: u32,
    pub experience_cap: u32,
    ranges: Vec<LevelRange>,
}

impl Progression {
    /// Cap used when no level ranges are configured.
    pub const DEFAULT_EXPERIENCE_CAP: u32 = 100;

    /// Level 1 with the cap taken from the first range.
    pub fn new(ranges: Vec<LevelRange>) -> Self {
        let experience_cap = ranges
            .first()
            .map_or(Self::DEFAULT_EXPERIENCE_CAP, |r| r.cap_increase);
        Self {
            experience: 0,
            level: 1,
            experience_cap,
            ranges,
        }
    }

    pub fn ranges(&self) -> &[LevelRange] {
        &self.ranges
    }

    /// Adds experience and returns the number of levels gained.
    ///
    /// A large grant may cross several caps at once. A zero cap never levels
    /// up, so a misconfigured table cannot loop forever.
    pub fn gain(&mut self, amount: u32) -> u32 {
        self.experience = self.experience.saturating_add(amount);

        let mut gained = 0;
        while self.experience_cap > 0 && self.experience >= self.experience_cap {
            self.level += 1;
            self.experience -= self.experience_cap;
            self.experience_cap += self.cap_increase_for(self.level);
            gained += 1;
        }
        gained
    }

    /// Fraction of the current cap filled, in `[0, 1]`.
    pub fn fill_ratio(&self) -> f32 {
        if self.experience_cap == 0 {
            return 0.0;
        }
        (self.experience as f32 / self.experience_cap as f32).min(1.0)
    }

    fn cap_increase_for(&self, level: u32) -> u32 {
        self.ranges
            .iter()
            .filter(|r| r.contains(level))
            .last()
            .map_or(0, |r| r.cap_increase)
    }
}

impl Default for Progression {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
