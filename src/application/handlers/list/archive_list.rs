//! ArchiveListHandler / RestoreListHandler - Command handlers for moving
//! lists between the active and completed screens.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::ListId;
use crate::domain::list::ListError;
use crate::ports::ListStore;

/// Command to mark a list as completed.
#[derive(Debug, Clone)]
pub struct ArchiveListCommand {
    pub list_id: ListId,
}

/// Command to bring a completed list back.
#[derive(Debug, Clone)]
pub struct RestoreListCommand {
    pub list_id: ListId,
}

/// Handler for archiving lists.
pub struct ArchiveListHandler {
    store: Arc<dyn ListStore>,
}

impl ArchiveListHandler {
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: ArchiveListCommand) -> Result<(), ListError> {
        let mut list = self
            .store
            .find_list(&cmd.list_id)
            .await?
            .ok_or_else(|| ListError::not_found(cmd.list_id))?;

        list.archive()?;
        self.store.update_list(&list).await?;

        info!(list_id = %cmd.list_id, "Archived list");
        Ok(())
    }
}

/// Handler for restoring lists. The restored list is unpinned and all its
/// items are unchecked.
pub struct RestoreListHandler {
    store: Arc<dyn ListStore>,
}

impl RestoreListHandler {
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: RestoreListCommand) -> Result<(), ListError> {
        let mut list = self
            .store
            .find_list(&cmd.list_id)
            .await?
            .ok_or_else(|| ListError::not_found(cmd.list_id))?;

        list.restore()?;
        self.store.update_list(&list).await?;

        info!(list_id = %cmd.list_id, "Restored list");
        Ok(())
    }
}
