//! In-Memory List Store Adapter
//!
//! Keeps lists in process memory. Used by the memory backend and in tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ListId, ListStatus};
use crate::domain::list::{ListInfo, ShopList};
use crate::ports::ListStore;

/// In-memory storage for shopping lists
#[derive(Debug, Clone, Default)]
pub struct InMemoryListStore {
    lists: Arc<RwLock<HashMap<ListId, ShopList>>>,
}

impl InMemoryListStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `lists`
    pub fn with_lists(lists: impl IntoIterator<Item = ShopList>) -> Self {
        let lists = lists.into_iter().map(|list| (*list.id(), list)).collect();
        Self {
            lists: Arc::new(RwLock::new(lists)),
        }
    }

    /// Get the number of stored lists
    pub async fn list_count(&self) -> usize {
        self.lists.read().await.len()
    }
}

#[async_trait]
impl ListStore for InMemoryListStore {
    async fn find_list(&self, id: &ListId) -> Result<Option<ShopList>, DomainError> {
        Ok(self.lists.read().await.get(id).cloned())
    }

    async fn update_list(&self, list: &ShopList) -> Result<(), DomainError> {
        self.lists.write().await.insert(*list.id(), list.clone());
        Ok(())
    }

    async fn delete_list(&self, id: &ListId) -> Result<(), DomainError> {
        self.lists.write().await.remove(id);
        Ok(())
    }

    async fn lists_with_status(&self, status: ListStatus) -> Result<Vec<ListInfo>, DomainError> {
        Ok(self
            .lists
            .read()
            .await
            .values()
            .filter(|list| list.status() == status)
            .map(|list| list.info().clone())
            .collect())
    }
}
