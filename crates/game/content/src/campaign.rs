//! Campaign files: waves, timed events, the boss and the player.

use horde_core::{
    AttributeBlock, Campaign, EventDefinition, EventScheduler, LevelRange, PlayerVitals,
};

/// The boss encounter that ends the regular campaign.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossSpec {
    /// Bestiary kind spawned when the time limit is reached.
    pub kind: String,
    /// Run time in seconds at which the boss appears.
    pub time_limit: f32,
}

/// Player character numbers.
///
/// `bonus` is a sparse delta added to the baseline player block, so a file
/// only lists what differs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerSpec {
    pub bonus: AttributeBlock,
    pub level_ranges: Vec<LevelRange>,
    pub invincibility_seconds: f32,
    /// Passives equipped at the start of the run.
    pub starting_passives: Vec<String>,
}

impl PlayerSpec {
    pub fn base(&self) -> AttributeBlock {
        AttributeBlock::PLAYER + self.bonus
    }
}

impl Default for PlayerSpec {
    fn default() -> Self {
        Self {
            bonus: AttributeBlock::ZERO,
            level_ranges: Vec::new(),
            invincibility_seconds: PlayerVitals::DEFAULT_INVINCIBILITY_SECONDS,
            starting_passives: Vec::new(),
        }
    }
}

/// Everything a run is configured with besides [`GameConfig`](horde_core::GameConfig).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CampaignSpec {
    pub waves: Campaign,
    pub events: Vec<EventDefinition>,
    pub first_trigger_delay: f32,
    pub trigger_interval: f32,
    pub boss: Option<BossSpec>,
    pub player: PlayerSpec,
}

impl CampaignSpec {
    pub fn scheduler(&self, run_seed: u64) -> EventScheduler {
        EventScheduler::new(self.first_trigger_delay, self.trigger_interval, run_seed)
    }

    /// Every kind the campaign may ask the bestiary for.
    pub fn referenced_kinds(&self) -> impl Iterator<Item = &str> {
        let waves = self
            .waves
            .waves()
            .iter()
            .flat_map(|wave| wave.spawn_pool.iter().map(String::as_str));
        let events = self.events.iter().map(|event| event.kind.as_str());
        let boss = self.boss.iter().map(|boss| boss.kind.as_str());
        waves.chain(events).chain(boss)
    }
}

impl Default for CampaignSpec {
    fn default() -> Self {
        Self {
            waves: Campaign::default(),
            events: Vec::new(),
            first_trigger_delay: EventScheduler::DEFAULT_FIRST_TRIGGER_DELAY,
            trigger_interval: EventScheduler::DEFAULT_TRIGGER_INTERVAL,
            boss: None,
            player: PlayerSpec::default(),
        }
    }
}
