//! RemoveItemHandler / RemoveCheckedHandler - Command handlers for deleting
//! items from a list.

use std::sync::Arc;

use tracing::debug;

use super::item_error;
use crate::domain::foundation::ListId;
use crate::domain::list::{ListError, ListItem};
use crate::ports::ListStore;

/// Command to delete one item.
#[derive(Debug, Clone)]
pub struct RemoveItemCommand {
    pub list_id: ListId,
    pub index: usize,
}

/// Command to delete every checked item, as the shopping screen's bottom
/// button does.
#[derive(Debug, Clone)]
pub struct RemoveCheckedCommand {
    pub list_id: ListId,
}

/// Handler for deleting a single item. Returns the removed item.
pub struct RemoveItemHandler {
    store: Arc<dyn ListStore>,
}

impl RemoveItemHandler {
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: RemoveItemCommand) -> Result<ListItem, ListError> {
        let mut list = self
            .store
            .find_list(&cmd.list_id)
            .await?
            .ok_or_else(|| ListError::not_found(cmd.list_id))?;

        let removed = list
            .remove_item(cmd.index)
            .map_err(|e| item_error(e, cmd.list_id, cmd.index))?;
        self.store.update_list(&list).await?;

        debug!(list_id = %cmd.list_id, index = cmd.index, "Removed item");
        Ok(removed)
    }
}

/// Handler for clearing checked items. Returns how many were removed.
pub struct RemoveCheckedHandler {
    store: Arc<dyn ListStore>,
}

impl RemoveCheckedHandler {
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: RemoveCheckedCommand) -> Result<usize, ListError> {
        let mut list = self
            .store
            .find_list(&cmd.list_id)
            .await?
            .ok_or_else(|| ListError::not_found(cmd.list_id))?;

        let removed = list.remove_checked()?;
        if removed > 0 {
            self.store.update_list(&list).await?;
        }

        debug!(list_id = %cmd.list_id, removed, "Removed checked items");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryListStore;
    use crate::domain::list::{Quantity, ShopList, Unit};

    fn groceries() -> ShopList {
        ShopList::new(
            ListId::new(),
            "Groceries".to_string(),
            vec![
                ListItem::new("Eggs", Quantity::whole(12).unwrap(), Unit::Piece),
                ListItem::new("Milk", Quantity::ONE, Unit::Volume).with_checked(true),
                ListItem::new("Bread", Quantity::ONE, Unit::Pack).with_checked(true),
            ],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn removes_single_item() {
        let list = groceries();
        let list_id = *list.id();
        let store = Arc::new(InMemoryListStore::with_lists([list]));
        let handler = RemoveItemHandler::new(store.clone());

        let removed = handler
            .handle(RemoveItemCommand { list_id, index: 1 })
            .await
            .unwrap();

        assert_eq!(removed.name, "Milk");
        let stored = store.find_list(&list_id).await.unwrap().unwrap();
        assert_eq!(stored.items().len(), 2);
    }

    #[tokio::test]
    async fn remove_unknown_index_is_item_not_found() {
        let list = groceries();
        let list_id = *list.id();
        let handler = RemoveItemHandler::new(Arc::new(InMemoryListStore::with_lists([list])));

        let result = handler.handle(RemoveItemCommand { list_id, index: 3 }).await;

        assert_eq!(result, Err(ListError::item_not_found(list_id, 3)));
    }

    #[tokio::test]
    async fn removes_checked_items() {
        let list = groceries();
        let list_id = *list.id();
        let store = Arc::new(InMemoryListStore::with_lists([list]));
        let handler = RemoveCheckedHandler::new(store.clone());

        let removed = handler
            .handle(RemoveCheckedCommand { list_id })
            .await
            .unwrap();

        assert_eq!(removed, 2);
        let stored = store.find_list(&list_id).await.unwrap().unwrap();
        assert_eq!(stored.items().len(), 1);
        assert_eq!(stored.items()[0].name, "Eggs");
    }

    #[tokio::test]
    async fn archived_list_items_cannot_be_removed() {
        let mut list = groceries();
        list.archive().unwrap();
        let list_id = *list.id();
        let handler = RemoveCheckedHandler::new(Arc::new(InMemoryListStore::with_lists([list])));

        let result = handler.handle(RemoveCheckedCommand { list_id }).await;

        assert_eq!(result, Err(ListError::Archived));
    }
}
