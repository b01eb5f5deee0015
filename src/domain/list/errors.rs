//! List-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ListId};

/// Errors returned by list command and query handlers.
#[derive(Debug, Clone, PartialEq)]
pub enum ListError {
    /// List was not found.
    NotFound(ListId),
    /// Item index does not exist in the list.
    ItemNotFound { list_id: ListId, index: usize },
    /// Invalid state for operation.
    InvalidState(String),
    /// List is archived and cannot be changed.
    Archived,
    /// Items may only be dragged between unchecked positions.
    MoveNotAllowed { from: usize, to: usize },
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl ListError {
    pub fn not_found(id: ListId) -> Self {
        ListError::NotFound(id)
    }
    pub fn item_not_found(list_id: ListId, index: usize) -> Self {
        ListError::ItemNotFound { list_id, index }
    }
    pub fn invalid_state(message: impl Into<String>) -> Self {
        ListError::InvalidState(message.into())
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ListError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        ListError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ListError::NotFound(_) => ErrorCode::ListNotFound,
            ListError::ItemNotFound { .. } => ErrorCode::ItemNotFound,
            ListError::InvalidState(_) => ErrorCode::InvalidStateTransition,
            ListError::Archived => ErrorCode::ListArchived,
            ListError::MoveNotAllowed { .. } => ErrorCode::MoveNotAllowed,
            ListError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ListError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ListError::NotFound(id) => format!("List not found: {}", id),
            ListError::ItemNotFound { list_id, index } => {
                format!("List {} has no item at position {}", list_id, index)
            }
            ListError::InvalidState(msg) => format!("Invalid state: {}", msg),
            ListError::Archived => "Cannot modify an archived list".to_string(),
            ListError::MoveNotAllowed { from, to } => {
                format!("Cannot move item {} to position {}", from, to)
            }
            ListError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ListError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ListError {}

impl From<DomainError> for ListError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ListArchived => ListError::Archived,
            ErrorCode::InvalidStateTransition => ListError::InvalidState(err.message),
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => ListError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => ListError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archived_domain_error_maps_to_archived() {
        let err = DomainError::new(ErrorCode::ListArchived, "nope");
        assert_eq!(ListError::from(err), ListError::Archived);
    }

    #[test]
    fn validation_keeps_field_detail() {
        let err = DomainError::validation("title", "Title cannot be empty");
        assert_eq!(
            ListError::from(err),
            ListError::validation("title", "Title cannot be empty")
        );
    }

    #[test]
    fn storage_errors_become_infrastructure() {
        let err = DomainError::storage("disk full");
        let list_err = ListError::from(err);
        assert_eq!(list_err.code(), ErrorCode::StorageError);
        assert!(list_err.message().contains("disk full"));
    }
}
