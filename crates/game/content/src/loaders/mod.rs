//! Content loaders for reading horde data from files.
//!
//! Each loader converts one RON/TOML file into the content types of this
//! crate or into `horde-core` types directly.

pub mod bestiary;
pub mod campaign;
pub mod config;
pub mod factory;
pub mod passives;

pub use bestiary::BestiaryLoader;
pub use campaign::CampaignLoader;
pub use config::ConfigLoader;
pub use factory::{Content, ContentFactory};
pub use passives::PassiveLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
