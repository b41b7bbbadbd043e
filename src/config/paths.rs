//! Path management
//!
//! Resolves where settings and the log file live.
//!
//! ## Path Resolution Order
//!
//! 1. `MONEYDECK_DATA_DIR` environment variable (if set)
//! 2. Platform config directory via `directories` (Linux:
//!    `~/.config/moneydeck`, macOS: `~/Library/Application Support/moneydeck`,
//!    Windows: `%APPDATA%\moneydeck`)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::DeckError;

/// Manages all paths used by the dashboard
#[derive(Debug, Clone)]
pub struct DeckPaths {
    /// Base directory for settings and logs
    base_dir: PathBuf,
}

impl DeckPaths {
    /// Resolve the base directory
    ///
    /// `MONEYDECK_DATA_DIR` wins when set; otherwise the platform config
    /// directory is used.
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, DeckError> {
        let base_dir = if let Ok(custom) = std::env::var("MONEYDECK_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            let dirs = ProjectDirs::from("", "", "moneydeck").ok_or_else(|| {
                DeckError::Config("Could not determine a config directory".into())
            })?;
            dirs.config_dir().to_path_buf()
        };

        Ok(Self { base_dir })
    }

    /// Create DeckPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the session log
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("moneydeck.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), DeckError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| DeckError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DeckPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.log_file(), temp_dir.path().join("moneydeck.log"));
    }

    #[test]
    fn test_env_var_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().to_str().unwrap();

        std::env::set_var("MONEYDECK_DATA_DIR", custom_path);

        let paths = DeckPaths::new().unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());

        std::env::remove_var("MONEYDECK_DATA_DIR");
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("moneydeck");
        let paths = DeckPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();

        assert!(base.exists());
    }
}
