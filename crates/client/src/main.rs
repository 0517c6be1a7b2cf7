//! Horde headless client binary.
//!
//! Runs one session with the content under `HORDE_DATA_DIR` and prints the
//! JSON run report to stdout. See [`ClientConfig::from_env`] for every
//! setting.
//!
//! ```bash
//! HORDE_SEED=7 HORDE_RUN_SECONDS=120 cargo run -p horde-client
//! ```

use anyhow::{Context, Result};
use horde_client::{AutoPilot, ClientConfig, logging};
use horde_content::ContentFactory;
use horde_runtime::{Session, SessionEvent};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(&config)?;

    tracing::info!("Starting horde client");
    tracing::info!(
        "Campaign: {} (data dir {})",
        config.campaign,
        config.data_dir.display()
    );
    tracing::info!("Seed: {}, step rate: {} Hz", config.run_seed, config.step_hz);

    let content = ContentFactory::new(&config.data_dir)
        .load_all(&config.campaign)
        .with_context(|| format!("Failed to load content from {}", config.data_dir.display()))?;

    let mut session = Session::builder()
        .config(config.runtime_config())
        .content(content)
        .build()?;
    let mut autopilot = AutoPilot::new(config.attack_interval);

    let dt = config.dt();
    let mut level_ups = 0u32;
    for _ in 0..config.max_steps() {
        autopilot.act(&mut session, dt)?;
        session.advance(dt)?;

        for event in session.drain_events() {
            if let SessionEvent::LevelUp { .. } = event {
                level_ups += 1;
            }
        }
        if session.status().is_over() {
            break;
        }
    }

    let report = session.report();
    tracing::info!(
        "Run ended: {:?} after {:.1}s, {} kills, {} level-ups",
        report.status,
        report.elapsed,
        report.hostiles_killed,
        level_ups
    );

    println!("{}", report.to_json()?);
    if let Some(path) = &config.report_path {
        report
            .write_json(path)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        tracing::info!("Report written to {}", path.display());
    }
    Ok(())
}
