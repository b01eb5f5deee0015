//! TogglePinHandler - Command handler for pinning and unpinning lists.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::ListId;
use crate::domain::list::ListError;
use crate::ports::ListStore;

/// Command to flip a list's pinned flag.
#[derive(Debug, Clone)]
pub struct TogglePinCommand {
    pub list_id: ListId,
}

/// Handler for pinning lists. Returns the new pinned state.
pub struct TogglePinHandler {
    store: Arc<dyn ListStore>,
}

impl TogglePinHandler {
    pub fn new(store: Arc<dyn ListStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: TogglePinCommand) -> Result<bool, ListError> {
        let mut list = self
            .store
            .find_list(&cmd.list_id)
            .await?
            .ok_or_else(|| ListError::not_found(cmd.list_id))?;

        let pinned = list.toggle_pin()?;
        self.store.update_list(&list).await?;

        info!(list_id = %cmd.list_id, pinned, "Toggled list pin");
        Ok(pinned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryListStore;
    use crate::domain::list::ShopList;

    #[tokio::test]
    async fn pins_and_unpins() {
        let list = ShopList::new(ListId::new(), "Groceries".to_string(), vec![]).unwrap();
        let list_id = *list.id();
        let store = Arc::new(InMemoryListStore::with_lists([list]));
        let handler = TogglePinHandler::new(store.clone());

        assert!(handler.handle(TogglePinCommand { list_id }).await.unwrap());
        assert!(store.find_list(&list_id).await.unwrap().unwrap().is_pinned());
        assert!(!handler.handle(TogglePinCommand { list_id }).await.unwrap());
    }

    #[tokio::test]
    async fn archived_list_cannot_be_pinned() {
        let mut list = ShopList::new(ListId::new(), "Groceries".to_string(), vec![]).unwrap();
        list.archive().unwrap();
        let list_id = *list.id();
        let handler = TogglePinHandler::new(Arc::new(InMemoryListStore::with_lists([list])));

        let result = handler.handle(TogglePinCommand { list_id }).await;

        assert_eq!(result, Err(ListError::Archived));
    }

    #[tokio::test]
    async fn missing_list_is_not_found() {
        let handler = TogglePinHandler::new(Arc::new(InMemoryListStore::new()));
        let list_id = ListId::new();

        let result = handler.handle(TogglePinCommand { list_id }).await;

        assert_eq!(result, Err(ListError::NotFound(list_id)));
    }
}
