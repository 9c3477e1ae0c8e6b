// errors.rs
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the caller of the data-shaping layer.
///
/// Soft misses (an unknown room type, a filter value nobody uses) are not
/// errors; they come back as sentinels. Only frankly invalid input, bad
/// commands, and failures reading an export land here.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A document lacks a field needed to identify it. Loaders skip these.
    #[error("{record} is missing required field '{field}'")]
    MissingField {
        record: &'static str,
        field: &'static str,
    },

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// Type alias commonly used across the crate.
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        AppError::InvalidInput(msg.into())
    }
}
