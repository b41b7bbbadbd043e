//! Session logging
//!
//! Structured logs go to a file under the data directory because the TUI
//! owns stdout. The filter is taken from `MONEYDECK_LOG` when set, otherwise
//! only this crate's events at info and above are recorded.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::filter::EnvFilter;

use crate::config::DeckPaths;
use crate::error::{DeckError, DeckResult};

const DEFAULT_FILTER: &str = "moneydeck=info";

/// Install the global tracing subscriber, writing to the session log file
pub fn init(paths: &DeckPaths) -> DeckResult<()> {
    paths.ensure_directories()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| DeckError::Io(format!("Failed to open log file: {}", e)))?;

    let filter = EnvFilter::try_from_env("MONEYDECK_LOG").or_else(|_| {
        EnvFilter::try_new(DEFAULT_FILTER)
            .map_err(|e| DeckError::Config(format!("Invalid log filter: {}", e)))
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| DeckError::Config(format!("Failed to install logger: {}", e)))?;

    tracing::info!(path = %paths.log_file().display(), "session log opened");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
