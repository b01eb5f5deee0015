//! List store port.
//!
//! Defines the contract for persisting shopping lists. Adapters implement
//! the four storage primitives; the editor-facing operations have default
//! implementations built on top of them.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ListId, ListStatus};
use crate::domain::list::{ListInfo, ListItem, ShopList};

/// Title and items of a stored list, as the editor loads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListContents {
    pub title: String,
    pub items: Vec<ListItem>,
}

/// Repository port for shopping lists.
///
/// Writes are unconditional upserts: there is no optimistic concurrency
/// check and the last writer wins.
#[async_trait]
pub trait ListStore: Send + Sync {
    /// Find a list by its ID. Returns `None` if not found.
    async fn find_list(&self, id: &ListId) -> Result<Option<ShopList>, DomainError>;

    /// Insert or overwrite a list.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn update_list(&self, list: &ShopList) -> Result<(), DomainError>;

    /// Delete a list and its items. Deleting a missing list is a no-op.
    async fn delete_list(&self, id: &ListId) -> Result<(), DomainError>;

    /// Headers of every list with the given status, in no particular order.
    async fn lists_with_status(&self, status: ListStatus) -> Result<Vec<ListInfo>, DomainError>;

    /// Lower-cased titles of all active lists.
    async fn list_existing_titles(&self) -> Result<HashSet<String>, DomainError> {
        Ok(self
            .lists_with_status(ListStatus::Active)
            .await?
            .into_iter()
            .map(|info| info.title.to_lowercase())
            .collect())
    }

    /// Title and items of a list, or `None` if it does not exist.
    async fn load_list(&self, id: &ListId) -> Result<Option<ListContents>, DomainError> {
        Ok(self.find_list(id).await?.map(|list| ListContents {
            title: list.title().to_string(),
            items: list.items().to_vec(),
        }))
    }

    /// Store a new list under a caller-chosen id.
    ///
    /// Repeating the call with the same id overwrites the earlier write.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if title is blank
    /// - `StorageError` on persistence failure
    async fn create_list(
        &self,
        id: &ListId,
        title: &str,
        items: &[ListItem],
    ) -> Result<(), DomainError> {
        let list = ShopList::new(*id, title.to_string(), items.to_vec())?;
        self.update_list(&list).await
    }

    /// Replace title and items of a list, keeping its date, pin and status.
    /// A missing list is created.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if title is blank
    /// - `StorageError` on persistence failure
    async fn replace_list(
        &self,
        id: &ListId,
        title: &str,
        items: &[ListItem],
    ) -> Result<(), DomainError> {
        match self.find_list(id).await? {
            Some(mut list) => {
                list.replace_contents(title.to_string(), items.to_vec())?;
                self.update_list(&list).await
            }
            None => self.create_list(id, title, items).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn ListStore) {}
    }
}
