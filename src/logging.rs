use std::{fs::OpenOptions, sync::Mutex};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::configs::get_default_data_dir;

const LOG_ENV_VAR: &str = "TALLY_LOG";
const LOG_FILE_NAME: &str = "tally.log";
const DEFAULT_DIRECTIVE: &str = "tally=info";

/// Routes `tracing` output to `<data dir>/tally.log`.
///
/// The terminal belongs to the TUI, so nothing is written to stdout or
/// stderr. Verbosity follows `TALLY_LOG` (e.g. `TALLY_LOG=tally=debug`).
pub fn init_logging() -> Result<()> {
    let log_dir = get_default_data_dir()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {:?}", log_dir))?;

    let log_path = log_dir.join(LOG_FILE_NAME);
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {:?}", log_path))?;

    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("Failed to install log subscriber")?;

    Ok(())
}
