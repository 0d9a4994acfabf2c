//! Error types for notification delivery

use thiserror::Error;

/// Result type for notifier setup
pub type Result<T> = std::result::Result<T, NotifierError>;

/// A single message could not be delivered
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// A notifier could not be set up
#[derive(Error, Debug)]
pub enum NotifierError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl NotifierError {
    pub fn config(message: impl Into<String>) -> Self {
        NotifierError::Config(message.into())
    }
}
