//! Custom error types for moneydeck
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. The dashboard itself never fails: missing
//! lookups are silent no-ops and malformed input coerces to zero, so the
//! variants here cover the ambient surface only (paths, settings, terminal).

use thiserror::Error;

/// The main error type for moneydeck operations
#[derive(Error, Debug)]
pub enum DeckError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Terminal setup/teardown errors
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl DeckError {
    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for DeckError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DeckError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for moneydeck operations
pub type DeckResult<T> = Result<T, DeckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DeckError::Config("missing settings file".into());
        assert_eq!(err.to_string(), "Configuration error: missing settings file");
        assert!(err.is_config());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let deck_err: DeckError = io_err.into();
        assert!(matches!(deck_err, DeckError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{bad").unwrap_err();
        let deck_err: DeckError = json_err.into();
        assert!(matches!(deck_err, DeckError::Json(_)));
    }
}
