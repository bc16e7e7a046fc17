//! Error types for document parsing and serialization.

/// Failure to turn text into a [`crate::Document`] or back.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Top level is not a mapping")]
    NotAMapping,

    #[error("Unsupported mapping key: {0}")]
    UnsupportedKey(String),
}
