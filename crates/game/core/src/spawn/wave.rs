//! Wave tables.

use bitflags::bitflags;

use super::error::ConfigurationError;

bitflags! {
    /// Conditions that must *all* hold before a wave ends.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(
        feature = "serde",
        derive(serde::Serialize, serde::Deserialize),
        serde(transparent)
    )]
    pub struct ExitConditions: u8 {
        /// The wave's duration has elapsed (or the wave is untimed).
        const WAVE_DURATION        = 1 << 0;
        /// The wave's spawn budget is spent (or the wave is unlimited).
        const REACHED_TOTAL_SPAWNS = 1 << 1;
        /// Every actor spawned by the controller has been eliminated.
        const KILL_ALL             = 1 << 2;
    }
}

/// Inclusive range of seconds between bursts.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntervalRange {
    pub min: f32,
    pub max: f32,
}

impl IntervalRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub const fn fixed(seconds: f32) -> Self {
        Self::new(seconds, seconds)
    }

    fn check(&self) -> Result<(), &'static str> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err("spawn interval must be finite");
        }
        if self.min < 0.0 {
            return Err("spawn interval must not be negative");
        }
        if self.min > self.max {
            return Err("spawn interval min exceeds max");
        }
        Ok(())
    }
}

impl Default for IntervalRange {
    fn default() -> Self {
        Self::new(2.0, 3.0)
    }
}

/// Inclusive range of actors per burst.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub const fn exactly(count: u32) -> Self {
        Self::new(count, count)
    }
}

impl Default for CountRange {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// One wave of the campaign.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Wave {
    pub name: String,
    /// Spawn kinds drawn uniformly for each actor of a burst.
    pub spawn_pool: Vec<String>,
    pub spawn_interval: IntervalRange,
    pub spawns_per_tick: CountRange,
    /// Bursts are raised so the live population reaches at least this many.
    pub starting_count: u32,
    /// Spawn budget for the wave; 0 means unlimited.
    pub total_spawns: u32,
    /// Wave length in seconds; 0 means untimed.
    pub duration: f32,
    pub exit_conditions: ExitConditions,
}

impl Wave {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_pool<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.spawn_pool = kinds.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_interval(mut self, interval: IntervalRange) -> Self {
        self.spawn_interval = interval;
        self
    }

    #[must_use]
    pub fn with_spawns_per_tick(mut self, spawns: CountRange) -> Self {
        self.spawns_per_tick = spawns;
        self
    }

    #[must_use]
    pub fn with_starting_count(mut self, count: u32) -> Self {
        self.starting_count = count;
        self
    }

    #[must_use]
    pub fn with_total_spawns(mut self, total: u32) -> Self {
        self.total_spawns = total;
        self
    }

    #[must_use]
    pub fn with_duration(mut self, seconds: f32) -> Self {
        self.duration = seconds;
        self
    }

    #[must_use]
    pub fn with_exit_conditions(mut self, conditions: ExitConditions) -> Self {
        self.exit_conditions = conditions;
        self
    }

    pub fn is_timed(&self) -> bool {
        self.duration > 0.0
    }

    pub fn is_budgeted(&self) -> bool {
        self.total_spawns > 0
    }

    /// Whether some selected exit condition can still be false on the
    /// wave's first step. `KILL_ALL` depends on the live set and always can.
    pub fn can_outlast_start(&self) -> bool {
        let conditions = self.exit_conditions;
        conditions.contains(ExitConditions::KILL_ALL)
            || (conditions.contains(ExitConditions::WAVE_DURATION) && self.is_timed())
            || (conditions.contains(ExitConditions::REACHED_TOTAL_SPAWNS) && self.is_budgeted())
    }

    /// Checks one wave; `index` is used for error reporting only.
    pub fn validate(&self, index: usize) -> Result<(), ConfigurationError> {
        let invalid = |reason: &str| ConfigurationError::InvalidWave {
            wave: index,
            reason: reason.to_owned(),
        };

        if self.spawn_pool.is_empty() {
            return Err(ConfigurationError::EmptySpawnPool { wave: index });
        }
        if self.exit_conditions.is_empty() {
            return Err(ConfigurationError::NoExitCondition { wave: index });
        }
        self.spawn_interval.check().map_err(invalid)?;
        if self.spawns_per_tick.min > self.spawns_per_tick.max {
            return Err(invalid("spawns per tick min exceeds max"));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(invalid("duration must be finite and not negative"));
        }
        if !self.can_outlast_start() {
            return Err(ConfigurationError::ImmediateExit { wave: index });
        }
        Ok(())
    }
}

impl Default for Wave {
    fn default() -> Self {
        Self {
            name: String::new(),
            spawn_pool: Vec::new(),
            spawn_interval: IntervalRange::default(),
            spawns_per_tick: CountRange::default(),
            starting_count: 0,
            total_spawns: 0,
            duration: 30.0,
            exit_conditions: ExitConditions::WAVE_DURATION,
        }
    }
}

/// Ordered list of waves.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Campaign {
    waves: Vec<Wave>,
}

impl Campaign {
    pub fn new(waves: Vec<Wave>) -> Self {
        Self { waves }
    }

    pub fn waves(&self) -> &[Wave] {
        &self.waves
    }

    pub fn wave(&self, index: usize) -> Option<&Wave> {
        self.waves.get(index)
    }

    pub fn len(&self) -> usize {
        self.waves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waves.is_empty()
    }

    /// Reports the first configuration problem, in wave order.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.waves.is_empty() {
            return Err(ConfigurationError::EmptyWaveTable);
        }
        self.waves
            .iter()
            .enumerate()
            .try_for_each(|(index, wave)| wave.validate(index))
    }
}

impl FromIterator<Wave> for Campaign {
    fn from_iter<I: IntoIterator<Item = Wave>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_wave() -> Wave {
        Wave::new("opening").with_pool(["bat"])
    }

    #[test]
    fn empty_campaign_is_rejected() {
        assert_eq!(
            Campaign::default().validate(),
            Err(ConfigurationError::EmptyWaveTable)
        );
    }

    #[test]
    fn wave_problems_are_reported_with_index() {
        let campaign: Campaign = [
            valid_wave(),
            valid_wave().with_exit_conditions(ExitConditions::empty()),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            campaign.validate(),
            Err(ConfigurationError::NoExitCondition { wave: 1 })
        );

        let no_pool = Campaign::new(vec![Wave::new("empty")]);
        assert_eq!(
            no_pool.validate(),
            Err(ConfigurationError::EmptySpawnPool { wave: 0 })
        );
    }

    #[test]
    fn exits_that_hold_from_the_start_are_rejected() {
        let untimed = valid_wave()
            .with_duration(0.0)
            .with_exit_conditions(ExitConditions::WAVE_DURATION);
        let unbudgeted = valid_wave()
            .with_total_spawns(0)
            .with_exit_conditions(ExitConditions::REACHED_TOTAL_SPAWNS);
        let campaign = Campaign::new(vec![valid_wave(), untimed.clone()]);
        assert_eq!(
            campaign.validate(),
            Err(ConfigurationError::ImmediateExit { wave: 1 })
        );
        assert_eq!(
            unbudgeted.validate(0),
            Err(ConfigurationError::ImmediateExit { wave: 0 })
        );
        let both = ExitConditions::WAVE_DURATION | ExitConditions::REACHED_TOTAL_SPAWNS;
        assert_eq!(
            untimed.clone().with_exit_conditions(both).validate(0),
            Err(ConfigurationError::ImmediateExit { wave: 0 })
        );

        // One condition that can still be false is enough.
        assert!(untimed.clone().with_duration(45.0).validate(0).is_ok());
        assert!(unbudgeted.with_total_spawns(20).validate(0).is_ok());
        assert!(
            untimed
                .with_exit_conditions(ExitConditions::WAVE_DURATION | ExitConditions::KILL_ALL)
                .validate(0)
                .is_ok()
        );
    }

    #[test]
    fn inverted_ranges_are_invalid() {
        let wave = valid_wave().with_interval(IntervalRange::new(3.0, 1.0));
        assert!(matches!(
            wave.validate(0),
            Err(ConfigurationError::InvalidWave { wave: 0, .. })
        ));
        let wave = valid_wave().with_spawns_per_tick(CountRange::new(4, 2));
        assert!(wave.validate(0).is_err());
        let wave = valid_wave().with_duration(f32::NAN);
        assert!(wave.validate(0).is_err());
        assert!(valid_wave().validate(0).is_ok());
    }
}
