//! Game configuration loader.

use std::path::Path;

use horde_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their defaults, so an empty file yields
    /// [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if !(config.min_pressure > 0.0) {
            anyhow::bail!(
                "min_pressure must be positive, got {}",
                config.min_pressure
            );
        }
        if !config.spawn_margin.is_finite() || config.spawn_margin < 0.0 {
            anyhow::bail!(
                "spawn_margin must be finite and not negative, got {}",
                config.spawn_margin
            );
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = ConfigLoader::parse("").expect("empty config parses");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn overrides_and_rejects_bad_values() {
        let config = ConfigLoader::parse("max_population = 50\nboosted_by_pressure = false\n")
            .expect("config parses");
        assert_eq!(config.max_population, 50);
        assert!(!config.boosted_by_pressure);

        assert!(ConfigLoader::parse("min_pressure = 0.0").is_err());
        assert!(ConfigLoader::parse("spawn_margin = -1.0").is_err());
    }
}
