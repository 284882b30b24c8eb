//! Error types for Questboard

use thiserror::Error;

/// Main error type for Questboard operations
#[derive(Error, Debug)]
pub enum QuestError {
    /// Quest id is not known to the provider
    #[error("Quest not found: {0}")]
    QuestNotFound(String),

    /// The completion service failed to answer
    #[error("Completion lookup failed: {0}")]
    Lookup(String),

    /// Catalog could not be parsed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using QuestError
pub type QuestResult<T> = Result<T, QuestError>;
