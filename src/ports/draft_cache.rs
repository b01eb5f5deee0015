//! Draft cache port.
//!
//! A single slot holding the one unsaved create-mode draft, so the user
//! gets their input back after leaving the editor without saving.

use async_trait::async_trait;

use crate::domain::editor::DraftSnapshot;

/// Errors that can occur during draft cache operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DraftCacheError {
    #[error("Failed to serialize draft: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize draft: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for the unsaved-draft slot
#[async_trait]
pub trait DraftCache: Send + Sync {
    /// Overwrite the slot with `draft`
    async fn save_draft(&self, draft: &DraftSnapshot) -> Result<(), DraftCacheError>;

    /// Read the slot, `None` if empty
    async fn load_draft(&self) -> Result<Option<DraftSnapshot>, DraftCacheError>;

    /// Empty the slot. Clearing an empty slot succeeds.
    async fn clear_draft(&self) -> Result<(), DraftCacheError>;
}
