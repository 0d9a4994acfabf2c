//! Error types for the draw

use std::path::PathBuf;
use thiserror::Error;

/// Result type for draw operations
pub type Result<T> = std::result::Result<T, DrawError>;

/// Errors that can occur while loading participants or drawing assignments
#[derive(Error, Debug)]
pub enum DrawError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Failed to read participant list {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Participant '{name}' is listed more than once")]
    DuplicateParticipant { name: String },

    #[error("A draw needs at least {min} participants, got {size}", min = crate::MIN_GROUP_SIZE)]
    InvalidGroupSize { size: usize },

    #[error("Invalid assignment cycle: {0}")]
    InvalidCycle(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DrawError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        DrawError::Configuration(message.into())
    }

    /// Whether the error comes from the input or its configuration rather than the draw itself
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            DrawError::Configuration(_)
                | DrawError::Io { .. }
                | DrawError::DuplicateParticipant { .. }
        )
    }
}
