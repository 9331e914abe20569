//! Log setup.  The terminal is in raw mode while playing, so logs go to a
//! file; without one, no subscriber is installed and events are dropped.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{GameError, Result};

/// Install a file-backed `fmt` subscriber.  `RUST_LOG` takes precedence
/// over `default_filter`.
pub fn init(log_file: Option<&Path>, default_filter: &str) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| GameError::Logging(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| GameError::Logging(e.to_string()))
}
