//! Shared error model.

use thiserror::Error;

/// Storage-level failure surfaced by a repository.
///
/// Keep this focused on infrastructure faults (connectivity, corrupted
/// store state). Business failures (validation, conflicts, not-found
/// outcomes) belong to the calling module's own error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The backing store could not be reached.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// The store was reached but the operation failed.
    #[error("storage operation failed: {0}")]
    Storage(String),
}

impl RepositoryError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

/// An identifier failed to parse from its textual form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid identifier: {0}")]
pub struct ParseIdError(pub String);
