//! Content factory for loading a whole data directory.

use std::path::{Path, PathBuf};

use horde_core::GameConfig;

use crate::bestiary::Bestiary;
use crate::campaign::CampaignSpec;
use crate::loaders::{
    BestiaryLoader, CampaignLoader, ConfigLoader, LoadResult, PassiveLoader,
};
use crate::passives::PassiveCatalog;

/// Everything needed to start a run.
#[derive(Clone, Debug, PartialEq)]
pub struct Content {
    pub config: GameConfig,
    pub campaign: CampaignSpec,
    pub bestiary: Bestiary,
    pub passives: PassiveCatalog,
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── campaign.ron
/// ├── bestiary.ron
/// └── passives.ron   (optional)
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load a campaign from `{name}.ron`.
    pub fn load_campaign(&self, name: &str) -> LoadResult<CampaignSpec> {
        CampaignLoader::load(&self.data_dir.join(format!("{}.ron", name)))
    }

    /// Load hostile kinds from `bestiary.ron`.
    pub fn load_bestiary(&self) -> LoadResult<Bestiary> {
        BestiaryLoader::load(&self.data_dir.join("bestiary.ron"))
    }

    /// Load passives from `passives.ron`; an absent file means no passives.
    pub fn load_passives(&self) -> LoadResult<PassiveCatalog> {
        let path = self.data_dir.join("passives.ron");
        if !path.exists() {
            return Ok(PassiveCatalog::new());
        }
        PassiveLoader::load(&path)
    }

    /// Loads every file and cross-checks references.
    ///
    /// Fails when the campaign names a hostile kind the bestiary lacks or a
    /// starting passive the catalog lacks.
    pub fn load_all(&self, campaign: &str) -> LoadResult<Content> {
        let config = self.load_config()?;
        let campaign = self.load_campaign(campaign)?;
        let bestiary = self.load_bestiary()?;
        let passives = self.load_passives()?;

        let mut missing = bestiary.missing(campaign.referenced_kinds());
        missing.sort_unstable();
        missing.dedup();
        if !missing.is_empty() {
            anyhow::bail!("Campaign references unknown kinds: {}", missing.join(", "));
        }
        if let Some(name) = campaign
            .player
            .starting_passives
            .iter()
            .find(|name| passives.modifier(name).is_none())
        {
            anyhow::bail!("Unknown starting passive '{}'", name);
        }

        Ok(Content {
            config,
            campaign,
            bestiary,
            passives,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
