//! DeleteListHandler - Command handler for deleting lists.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::ListId;
use crate::domain::list::ListError;
use crate::ports::ListStore;

/// Command to delete a list and its items.
#[derive(Debug, Clone)]
pub struct DeleteListCommand {
    pub list_id: ListId,
}

/// Handler for deleting lists.
pub struct DeleteListHandler {
    store: Arc<dyn ListStore>,
}

impl DeleteListHandler {
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteListCommand) -> Result<(), ListError> {
        if self.store.find_list(&cmd.list_id).await?.is_none() {
            return Err(ListError::not_found(cmd.list_id));
        }

        self.store.delete_list(&cmd.list_id).await?;

        info!(list_id = %cmd.list_id, "Deleted list");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryListStore;
    use crate::domain::list::ShopList;

    #[tokio::test]
    async fn deletes_existing_list() {
        let list = ShopList::new(ListId::new(), "Groceries".to_string(), vec![]).unwrap();
        let list_id = *list.id();
        let store = Arc::new(InMemoryListStore::with_lists([list]));
        let handler = DeleteListHandler::new(store.clone());

        handler.handle(DeleteListCommand { list_id }).await.unwrap();

        assert_eq!(store.list_count().await, 0);
    }

    #[tokio::test]
    async fn missing_list_is_not_found() {
        let handler = DeleteListHandler::new(Arc::new(InMemoryListStore::new()));
        let list_id = ListId::new();

        let result = handler.handle(DeleteListCommand { list_id }).await;

        assert_eq!(result, Err(ListError::NotFound(list_id)));
    }
}
