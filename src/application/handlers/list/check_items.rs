//! CheckItemHandler / CheckAllHandler - Command handlers for checking
//! items off while shopping.

use std::sync::Arc;

use tracing::debug;

use super::item_error;
use crate::domain::foundation::ListId;
use crate::domain::list::ListError;
use crate::ports::ListStore;

/// Command to check or uncheck one item.
#[derive(Debug, Clone)]
pub struct CheckItemCommand {
    pub list_id: ListId,
    pub index: usize,
    pub checked: bool,
}

/// Command to check or uncheck every item of a list.
#[derive(Debug, Clone)]
pub struct CheckAllCommand {
    pub list_id: ListId,
    pub checked: bool,
}

/// Handler for checking single items. Returns true if the item changed.
pub struct CheckItemHandler {
    store: Arc<dyn ListStore>,
}

impl CheckItemHandler {
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CheckItemCommand) -> Result<bool, ListError> {
        let mut list = self
            .store
            .find_list(&cmd.list_id)
            .await?
            .ok_or_else(|| ListError::not_found(cmd.list_id))?;

        let changed = list
            .set_item_checked(cmd.index, cmd.checked)
            .map_err(|e| item_error(e, cmd.list_id, cmd.index))?;

        if changed {
            self.store.update_list(&list).await?;
        }

        debug!(list_id = %cmd.list_id, index = cmd.index, checked = cmd.checked, changed, "Checked item");
        Ok(changed)
    }
}

/// Handler for checking all items. Returns how many items changed.
pub struct CheckAllHandler {
    store: Arc<dyn ListStore>,
}

impl CheckAllHandler {
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CheckAllCommand) -> Result<usize, ListError> {
        let mut list = self
            .store
            .find_list(&cmd.list_id)
            .await?
            .ok_or_else(|| ListError::not_found(cmd.list_id))?;

        let changed = list.set_all_checked(cmd.checked)?;
        if changed > 0 {
            self.store.update_list(&list).await?;
        }

        debug!(list_id = %cmd.list_id, checked = cmd.checked, changed, "Checked all items");
        Ok(changed)
    }
}
