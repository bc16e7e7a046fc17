//! Configuration errors

use std::io;

use layercfg_document::DocumentError;

/// Errors surfaced by load and save
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[source] DocumentError),

    #[error("Invalid UTF-8 in configuration: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[source] DocumentError),

    #[error("Resource not found: {0}")]
    ResourceMissing(String),
}

impl ConfigError {
    /// Whether the underlying text could not be parsed
    pub fn is_invalid(&self) -> bool {
        matches!(self, ConfigError::Invalid(_) | ConfigError::Encoding(_))
    }
}
