//! End-of-run summary, serialized as JSON.
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::session::SessionStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub status: SessionStatus,
    pub elapsed: f32,
    pub wave_index: usize,
    pub wave_name: Option<String>,
    pub waves: usize,
    /// Wave runner phase label, e.g. `"cooldown"`.
    pub phase: String,
    pub disabled_reason: Option<String>,
    pub hostiles_alive: usize,
    pub hostiles_spawned: u64,
    pub hostiles_killed: u64,
    pub player_level: u32,
    pub player_health: f32,
    pub experience: u32,
}

impl RunReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the report to `path`, replacing any existing file.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}
