//! Client configuration read from the process environment.
use std::env;
use std::path::PathBuf;

use horde_core::GameConfig;
use horde_runtime::RuntimeConfig;

/// Everything the headless client needs to run one session.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub data_dir: PathBuf,
    pub campaign: String,
    pub run_seed: u64,
    /// Simulation steps per second.
    pub step_hz: u32,
    /// Run length cap in seconds; the run also ends on victory or defeat.
    pub run_seconds: f32,
    pub boss_time_limit: Option<f32>,
    /// Seconds between autopilot attacks; 0 disables the autopilot.
    pub attack_interval: f32,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            campaign: "campaign".to_owned(),
            run_seed: 0,
            step_hz: 60,
            run_seconds: 600.0,
            boss_time_limit: None,
            attack_interval: 0.5,
            session_id: None,
            log_dir: None,
            report_path: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HORDE_DATA_DIR` - Content directory (default: `data`)
    /// - `HORDE_CAMPAIGN` - Campaign file stem under the data dir (default: `campaign`)
    /// - `HORDE_SEED` - Run seed (default: 0)
    /// - `HORDE_STEP_HZ` - Steps per simulated second (default: 60)
    /// - `HORDE_RUN_SECONDS` - Simulated run length cap (default: 600)
    /// - `HORDE_BOSS_TIME_LIMIT` - Overrides the campaign's boss time limit
    /// - `HORDE_ATTACK_INTERVAL` - Autopilot attack period, 0 to disable (default: 0.5)
    /// - `HORDE_SESSION_ID` - Session identifier for the log directory (default: auto-generated)
    /// - `HORDE_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `HORDE_REPORT` - Path to write the JSON run report to
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("HORDE_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }
        if let Ok(campaign) = env::var("HORDE_CAMPAIGN") {
            config.campaign = campaign;
        }
        if let Some(seed) = read_env::<u64>("HORDE_SEED") {
            config.run_seed = seed;
        }
        if let Some(hz) = read_env::<u32>("HORDE_STEP_HZ") {
            config.step_hz = hz.max(1);
        }
        if let Some(seconds) = read_env::<f32>("HORDE_RUN_SECONDS") {
            config.run_seconds = seconds.max(0.0);
        }
        config.boss_time_limit = read_env::<f32>("HORDE_BOSS_TIME_LIMIT");
        if let Some(interval) = read_env::<f32>("HORDE_ATTACK_INTERVAL") {
            config.attack_interval = interval.max(0.0);
        }

        config.session_id = env::var("HORDE_SESSION_ID").ok();
        config.log_dir = env::var("HORDE_LOG_DIR").ok().map(PathBuf::from);
        config.report_path = env::var("HORDE_REPORT").ok().map(PathBuf::from);

        config
    }

    /// Step length in seconds.
    pub fn dt(&self) -> f32 {
        1.0 / self.step_hz.max(1) as f32
    }

    pub fn max_steps(&self) -> u64 {
        (self.run_seconds * self.step_hz as f32).ceil() as u64
    }

    /// Runtime settings; the game config is replaced by loaded content.
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            game_config: GameConfig::default(),
            run_seed: self.run_seed,
            boss_time_limit: self.boss_time_limit,
            ..RuntimeConfig::default()
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
