//! Error types for quicknote-core

use thiserror::Error;

use crate::models::NoteId;

/// Result type alias using quicknote-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in quicknote-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input, e.g. blank note text
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Note not found
    #[error("Note not found: {0}")]
    NotFound(NoteId),

    /// Every note id has been handed out
    #[error("Note id space exhausted")]
    IdsExhausted,

    /// Preferences backend failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error came from the persistence layer rather than from
    /// the caller's request.
    #[must_use]
    pub const fn is_persistence(&self) -> bool {
        matches!(
            self,
            Self::Storage(_) | Self::Io(_) | Self::Serialization(_)
        )
    }
}
