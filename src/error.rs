//! Error types for fretboard rendering.

use thiserror::Error;

/// Errors raised while configuring or redrawing a fretboard diagram.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FretboardError {
    /// A catalog lookup (arpeggio or scale name) had no exact match.
    #[error("no catalog entry named '{name}'")]
    NotFound { name: String },

    /// A JSON configuration could not be deserialized.
    #[error("invalid diagram configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for FretboardError {
    fn from(e: serde_json::Error) -> Self {
        FretboardError::InvalidConfig(e.to_string())
    }
}
