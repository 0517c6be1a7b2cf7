//! Logging to stderr and, when a log directory is available, to a file.
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::ClientConfig;

/// Installs the global subscriber. Keep the returned guard alive for the
/// whole run or buffered file output is lost.
pub fn setup_logging(config: &ClientConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match session_log_dir(config) {
        Some(dir) => {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(&dir, "horde.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some((layer, dir)), Some(guard))
        }
        None => (None, None),
    };

    let log_file = file_layer.as_ref().map(|(_, dir)| dir.join("horde.log"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer.map(|(layer, _)| layer))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    match log_file {
        Some(path) => tracing::info!("Log file: {}", path.display()),
        None => tracing::warn!("No log directory available; logging to stderr only"),
    }
    Ok(guard)
}

fn session_log_dir(config: &ClientConfig) -> Option<PathBuf> {
    let root = config.log_dir.clone().or_else(|| {
        ProjectDirs::from("", "", "horde").map(|dirs| dirs.cache_dir().join("logs"))
    })?;
    let session_id = config.session_id.clone().unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{timestamp}")
    });
    Some(root.join(session_id))
}
