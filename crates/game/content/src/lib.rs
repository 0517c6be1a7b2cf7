//! Data-driven content definitions and loaders.
//!
//! This crate houses the authoring forms of horde content and the loaders
//! that read them from RON/TOML data files:
//! - Game configuration (TOML)
//! - Campaigns: waves, timed events, boss and player (RON)
//! - Bestiary of hostile kinds (RON)
//! - Passive catalog (RON)
//!
//! Content is consumed by the runtime and never appears in runner state.

pub mod bestiary;
pub mod campaign;
pub mod passives;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use bestiary::{Bestiary, HostileSpec};
pub use campaign::{BossSpec, CampaignSpec, PlayerSpec};
pub use passives::{PassiveCatalog, PassiveSpec};

#[cfg(feature = "loaders")]
pub use loaders::{
    BestiaryLoader, CampaignLoader, ConfigLoader, Content, ContentFactory, LoadResult,
    PassiveLoader,
};
