//! Error types for comment-board

use crate::types::CommentId;
use thiserror::Error;

/// Main error type for comment-board
#[derive(Debug, Error)]
pub enum BoardError {
    /// Store operation referenced an id that does not exist
    #[error("Comment not found: {0}")]
    NotFound(CommentId),

    /// Moderation gate could not produce a verdict
    #[error("Moderation unavailable: {0}")]
    ModerationUnavailable(String),

    /// Remote comment store could not complete the call
    #[error("Comment store unavailable: {0}")]
    StoreUnavailable(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<BoardError>,
    },
}

impl BoardError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        BoardError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Check whether this error (or the error it wraps) is a `NotFound`
    pub fn is_not_found(&self) -> bool {
        match self {
            BoardError::NotFound(_) => true,
            BoardError::WithContext { source, .. } => source.is_not_found(),
            _ => false,
        }
    }
}

/// Result type alias for comment-board
pub type Result<T> = std::result::Result<T, BoardError>;
