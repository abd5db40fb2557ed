//! Logging init: file under the XDG state dir, falling back to stderr.

use anyhow::Result;
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,dropgate=debug";

/// Initialize structured logging.
///
/// Log lines go to `~/.local/state/dropgate/dropgate.log`; when the state dir
/// cannot be created or opened the subscriber writes to stderr instead, so
/// callers need no fallback path of their own. The filter comes from
/// `RUST_LOG` when set.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let (writer, log_path) = match open_log_file() {
        Ok((file, path)) => (BoxMakeWriter::new(Mutex::new(file)), Some(path)),
        Err(_) => (BoxMakeWriter::new(io::stderr), None),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    match log_path {
        Some(path) => tracing::info!("dropgate logging initialized at {}", path.display()),
        None => tracing::warn!("log file unavailable; logging to stderr"),
    }
}

fn open_log_file() -> Result<(File, PathBuf)> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dropgate")?;
    let log_dir = xdg_dirs.get_state_home().join("dropgate");
    fs::create_dir_all(&log_dir)?;

    let path = log_dir.join("dropgate.log");
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((file, path))
}
