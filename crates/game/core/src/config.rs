/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Global live-population cap. No further spawns are admitted once the
    /// number of live hostiles reaches this value.
    pub max_population: u32,

    /// When set, spawn cooldowns shrink as the cumulative curse grows.
    pub boosted_by_pressure: bool,

    /// Lower bound applied to the pressure scalar before dividing the spawn
    /// interval by it.
    pub min_pressure: f32,

    /// Outward offset of spawn positions, as a fraction of the viewport.
    pub spawn_margin: f32,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_POPULATION: u32 = 300;
    pub const DEFAULT_MIN_PRESSURE: f32 = 0.001;
    pub const DEFAULT_SPAWN_MARGIN: f32 = 0.1;

    pub fn new() -> Self {
        Self {
            max_population: Self::DEFAULT_MAX_POPULATION,
            boosted_by_pressure: true,
            min_pressure: Self::DEFAULT_MIN_PRESSURE,
            spawn_margin: Self::DEFAULT_SPAWN_MARGIN,
        }
    }

    pub fn with_max_population(max_population: u32) -> Self {
        Self {
            max_population,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
