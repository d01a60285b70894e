use color_eyre::eyre::{Result, eyre};
use rawcull_config::Settings;
use std::{env, fs, path::PathBuf, sync::Mutex};
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "rawcull.log";

/// Sends all tracing output to a log file, since the terminal belongs to the UI.
///
/// `RUST_LOG` overrides `settings.log_filter`. The file is truncated on every
/// start. Returns the path of the log file.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created, or a
/// global subscriber is already installed.
pub fn setup_logging(settings: &Settings) -> Result<PathBuf> {
    let log_dir = match settings.resolved_log_dir() {
        Some(dir) => dir,
        None => env::current_dir()?.join("logs"),
    };
    fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join(LOG_FILE);

    let log_file = fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)?;

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&settings.log_filter))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_thread_ids(false)
        .try_init()
        .map_err(|e| eyre!("Failed to install logger: {e}"))?;

    tracing::info!("Starting rawcull {}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Log file: {}", log_path.display());

    Ok(log_path)
}
