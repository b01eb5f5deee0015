//! Editor error types.
//!
//! Field validation never shows up here: a bad name becomes a
//! [`NameError`](super::NameError) on its row. These are the failures the
//! screen has to react to.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ListId, RowId, ValidationError};
use crate::ports::DraftCacheError;

#[derive(Debug, Clone, Error)]
pub enum EditorError {
    #[error("Editor has not loaded its draft yet")]
    NotLoaded,

    #[error("Editor is closed")]
    Closed,

    #[error("List to edit was not found: {0}")]
    ListNotFound(ListId),

    #[error("Row {0} does not exist in the draft")]
    UnknownRow(RowId),

    #[error("Row {0} cannot be changed by this intent")]
    ProtectedRow(RowId),

    #[error("Invalid editor transition: {0}")]
    InvalidTransition(#[from] ValidationError),

    #[error("Failed to persist list: {0}")]
    Persistence(#[from] DomainError),

    #[error("Draft cache failure: {0}")]
    DraftCache(#[from] DraftCacheError),
}

impl EditorError {
    /// True for failures the user can retry from the same screen.
    pub fn is_retryable(&self) -> bool {
        match self {
            EditorError::Persistence(e) => e.code == ErrorCode::StorageError,
            EditorError::DraftCache(_) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistence_errors_are_retryable() {
        let err = EditorError::from(DomainError::storage("disk full"));
        assert!(err.is_retryable());
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn contract_errors_are_not_retryable() {
        assert!(!EditorError::UnknownRow(RowId::new()).is_retryable());
        assert!(!EditorError::NotLoaded.is_retryable());
    }

    #[test]
    fn rejected_contents_are_not_retryable() {
        let err = EditorError::from(DomainError::validation("title", "Title cannot be empty"));
        assert!(!err.is_retryable());
    }
}
