//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the shopping list domain.

mod errors;
mod ids;
mod list_status;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ListId, RowId};
pub use list_status::ListStatus;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
