//! User settings
//!
//! Display preferences for the dashboard. The demo dataset itself is never
//! persisted; settings are the only thing written to disk.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use super::paths::DeckPaths;
use crate::error::DeckError;

/// User settings for the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Date format for freshly entered transactions (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether amounts render with thousands separators
    #[serde(default = "default_grouped_amounts")]
    pub grouped_amounts: bool,

    /// Accent color name for highlights and focus markers
    #[serde(default = "default_accent")]
    pub accent: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%-d %b".to_string()
}

fn default_grouped_amounts() -> bool {
    true
}

fn default_accent() -> String {
    "cyan".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_format: default_date_format(),
            grouped_amounts: default_grouped_amounts(),
            accent: default_accent(),
        }
    }
}

impl Settings {
    /// Accent color for the terminal theme
    ///
    /// Unknown names fall back to cyan rather than failing the session.
    pub fn accent_color(&self) -> Color {
        match self.accent.to_lowercase().as_str() {
            "blue" => Color::Blue,
            "green" => Color::Green,
            "magenta" => Color::Magenta,
            "red" => Color::Red,
            "yellow" => Color::Yellow,
            "white" => Color::White,
            _ => Color::Cyan,
        }
    }

    /// Load settings from disk, or fall back to defaults if no file exists
    pub fn load_or_create(paths: &DeckPaths) -> Result<Self, DeckError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| DeckError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| DeckError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &DeckPaths) -> Result<(), DeckError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| DeckError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| DeckError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.date_format, "%-d %b");
        assert!(settings.grouped_amounts);
        assert_eq!(settings.accent, "cyan");
    }

    #[test]
    fn test_accent_color_mapping() {
        let mut settings = Settings::default();
        assert_eq!(settings.accent_color(), Color::Cyan);

        settings.accent = "Magenta".to_string();
        assert_eq!(settings.accent_color(), Color::Magenta);

        settings.accent = "chartreuse".to_string();
        assert_eq!(settings.accent_color(), Color::Cyan);
    }

    #[test]
    fn test_load_without_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DeckPaths::with_base_dir(temp_dir.path().to_path_buf());

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DeckPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.accent = "green".to_string();
        settings.grouped_amounts = false;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.accent, "green");
        assert!(!loaded.grouped_amounts);
    }

    #[test]
    fn test_malformed_settings_is_a_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DeckPaths::with_base_dir(temp_dir.path().to_path_buf());

        std::fs::write(paths.settings_file(), "{not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(err.is_config());
    }
}
