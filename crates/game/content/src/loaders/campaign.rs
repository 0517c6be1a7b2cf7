//! Campaign loader.

use std::path::Path;

use crate::campaign::CampaignSpec;
use crate::loaders::{LoadResult, read_file};

/// Loader for campaign files (RON).
///
/// ```ron
/// (
///     waves: [
///         (
///             name: "opening",
///             spawn_pool: ["bat"],
///             spawn_interval: (min: 1.0, max: 2.0),
///             spawns_per_tick: (min: 1, max: 3),
///             duration: 60.0,
///             exit_conditions: "WAVE_DURATION",
///         ),
///     ],
///     boss: Some((kind: "reaper", time_limit: 600.0)),
/// )
/// ```
pub struct CampaignLoader;

impl CampaignLoader {
    /// Load and validate a campaign.
    ///
    /// Wave tables are checked with [`horde_core::Campaign::validate`] so a
    /// broken file fails at load time rather than disabling the controller
    /// mid-run.
    pub fn load(path: &Path) -> LoadResult<CampaignSpec> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid campaign {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<CampaignSpec> {
        let spec: CampaignSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse campaign RON: {}", e))?;
        spec.waves.validate()?;
        Ok(spec)
    }
}
