//! SortItemsHandler / MoveItemHandler - Command handlers for reordering
//! items on the shopping screen.

use std::sync::Arc;

use tracing::debug;

use crate::domain::foundation::{ErrorCode, ListId};
use crate::domain::list::{ListError, SortOrder};
use crate::ports::ListStore;

/// Command to sort a list's unchecked items by name.
///
/// The screen keeps the last order it applied and sends
/// [`SortOrder::toggled`] on the next press.
#[derive(Debug, Clone)]
pub struct SortItemsCommand {
    pub list_id: ListId,
    pub order: SortOrder,
}

/// Command to drag one item to a new position.
#[derive(Debug, Clone)]
pub struct MoveItemCommand {
    pub list_id: ListId,
    pub from: usize,
    pub to: usize,
}

pub struct SortItemsHandler {
    store: Arc<dyn ListStore>,
}

impl SortItemsHandler {
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SortItemsCommand) -> Result<(), ListError> {
        let mut list = self
            .store
            .find_list(&cmd.list_id)
            .await?
            .ok_or_else(|| ListError::not_found(cmd.list_id))?;

        list.sort_items(cmd.order)?;
        self.store.update_list(&list).await?;

        debug!(list_id = %cmd.list_id, order = ?cmd.order, "Sorted items");
        Ok(())
    }
}

/// Handler for drag-and-drop reordering. Only unchecked items move, and
/// only onto unchecked positions.
pub struct MoveItemHandler {
    store: Arc<dyn ListStore>,
}

impl MoveItemHandler {
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: MoveItemCommand) -> Result<(), ListError> {
        let mut list = self
            .store
            .find_list(&cmd.list_id)
            .await?
            .ok_or_else(|| ListError::not_found(cmd.list_id))?;

        if cmd.from == cmd.to {
            return Ok(());
        }

        list.move_item(cmd.from, cmd.to).map_err(|e| match e.code {
            ErrorCode::MoveNotAllowed => ListError::MoveNotAllowed {
                from: cmd.from,
                to: cmd.to,
            },
            ErrorCode::ItemNotFound => {
                let index = if cmd.from < list.items().len() { cmd.to } else { cmd.from };
                ListError::item_not_found(cmd.list_id, index)
            }
            _ => e.into(),
        })?;
        self.store.update_list(&list).await?;

        debug!(list_id = %cmd.list_id, from = cmd.from, to = cmd.to, "Moved item");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryListStore;
    use crate::domain::list::{ListItem, Quantity, ShopList, Unit};

    fn groceries() -> ShopList {
        let item = |name: &str| ListItem::new(name, Quantity::ONE, Unit::Piece);
        ShopList::new(
            ListId::new(),
            "Groceries".to_string(),
            vec![
                item("Milk"),
                item("Bread"),
                item("Eggs"),
                item("Apples").with_checked(true),
            ],
        )
        .unwrap()
    }

    async fn stored_names(store: &InMemoryListStore, id: &ListId) -> Vec<String> {
        store
            .find_list(id)
            .await
            .unwrap()
            .unwrap()
            .items()
            .iter()
            .map(|item| item.name.clone())
            .collect()
    }

    #[tokio::test]
    async fn sort_toggles_between_orders() {
        let list = groceries();
        let list_id = *list.id();
        let store = Arc::new(InMemoryListStore::with_lists([list]));
        let handler = SortItemsHandler::new(store.clone());

        let order = SortOrder::default();
        handler
            .handle(SortItemsCommand { list_id, order })
            .await
            .unwrap();
        assert_eq!(
            stored_names(&store, &list_id).await,
            ["Bread", "Eggs", "Milk", "Apples"]
        );

        handler
            .handle(SortItemsCommand {
                list_id,
                order: order.toggled(),
            })
            .await
            .unwrap();
        assert_eq!(
            stored_names(&store, &list_id).await,
            ["Milk", "Eggs", "Bread", "Apples"]
        );
    }

    #[tokio::test]
    async fn moves_unchecked_item() {
        let list = groceries();
        let list_id = *list.id();
        let store = Arc::new(InMemoryListStore::with_lists([list]));
        let handler = MoveItemHandler::new(store.clone());

        handler
            .handle(MoveItemCommand {
                list_id,
                from: 0,
                to: 2,
            })
            .await
            .unwrap();

        assert_eq!(
            stored_names(&store, &list_id).await,
            ["Bread", "Eggs", "Milk", "Apples"]
        );
    }

    #[tokio::test]
    async fn move_into_checked_section_is_rejected() {
        let list = groceries();
        let list_id = *list.id();
        let store = Arc::new(InMemoryListStore::with_lists([list]));
        let handler = MoveItemHandler::new(store.clone());

        let result = handler
            .handle(MoveItemCommand {
                list_id,
                from: 1,
                to: 3,
            })
            .await;

        assert_eq!(result, Err(ListError::MoveNotAllowed { from: 1, to: 3 }));
        assert_eq!(
            stored_names(&store, &list_id).await,
            ["Milk", "Bread", "Eggs", "Apples"]
        );
    }

    #[tokio::test]
    async fn move_past_end_is_item_not_found() {
        let list = groceries();
        let list_id = *list.id();
        let handler = MoveItemHandler::new(Arc::new(InMemoryListStore::with_lists([list])));

        let result = handler
            .handle(MoveItemCommand {
                list_id,
                from: 0,
                to: 8,
            })
            .await;

        assert_eq!(result, Err(ListError::item_not_found(list_id, 8)));
    }

    #[tokio::test]
    async fn sort_missing_list_is_not_found() {
        let handler = SortItemsHandler::new(Arc::new(InMemoryListStore::new()));
        let list_id = ListId::new();

        let result = handler
            .handle(SortItemsCommand {
                list_id,
                order: SortOrder::Ascending,
            })
            .await;

        assert_eq!(result, Err(ListError::not_found(list_id)));
    }
}
