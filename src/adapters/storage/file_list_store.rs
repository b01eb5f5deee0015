//! File-based List Store Adapter
//!
//! Stores each list as a YAML file named after its id:
//!
//! ```text
//! <base_path>/
//!   3f1c...e2.yaml
//!   9a07...4b.yaml
//! ```

use async_trait::async_trait;
use serde_yaml;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::warn;

use crate::domain::foundation::{DomainError, ListId, ListStatus};
use crate::domain::list::{ListInfo, ShopList};
use crate::ports::ListStore;

/// File-based storage for shopping lists
#[derive(Debug, Clone)]
pub struct FileListStore {
    base_path: PathBuf,
}

impl FileListStore {
    /// Create a new file store with a base directory
    ///
    /// The directory is created on first write.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the file path for a list
    fn list_file_path(&self, id: &ListId) -> PathBuf {
        self.base_path.join(format!("{}.yaml", id))
    }

    /// Ensure the base directory exists
    async fn ensure_dir(&self) -> Result<(), DomainError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| io_error("create directory", &self.base_path, e))
    }

    async fn read_list(&self, path: &Path) -> Result<ShopList, DomainError> {
        let yaml = fs::read_to_string(path)
            .await
            .map_err(|e| io_error("read", path, e))?;

        serde_yaml::from_str(&yaml).map_err(|e| {
            DomainError::storage(format!("Failed to deserialize list: {}", e))
                .with_detail("path", path.display().to_string())
        })
    }
}

fn io_error(action: &str, path: &Path, e: std::io::Error) -> DomainError {
    DomainError::storage(format!("Failed to {}: {}", action, e))
        .with_detail("path", path.display().to_string())
}

#[async_trait]
impl ListStore for FileListStore {
    async fn find_list(&self, id: &ListId) -> Result<Option<ShopList>, DomainError> {
        let file_path = self.list_file_path(id);

        if !file_path.exists() {
            return Ok(None);
        }

        self.read_list(&file_path).await.map(Some)
    }

    async fn update_list(&self, list: &ShopList) -> Result<(), DomainError> {
        self.ensure_dir().await?;

        let yaml = serde_yaml::to_string(list)
            .map_err(|e| DomainError::storage(format!("Failed to serialize list: {}", e)))?;

        let file_path = self.list_file_path(list.id());
        fs::write(&file_path, yaml)
            .await
            .map_err(|e| io_error("write", &file_path, e))
    }

    async fn delete_list(&self, id: &ListId) -> Result<(), DomainError> {
        let file_path = self.list_file_path(id);

        if file_path.exists() {
            fs::remove_file(&file_path)
                .await
                .map_err(|e| io_error("delete", &file_path, e))?;
        }

        Ok(())
    }

    async fn lists_with_status(&self, status: ListStatus) -> Result<Vec<ListInfo>, DomainError> {
        if !self.base_path.exists() {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&self.base_path)
            .await
            .map_err(|e| io_error("read directory", &self.base_path, e))?;

        let mut infos = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| io_error("read directory", &self.base_path, e))?
        {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("yaml") {
                continue;
            }

            // Unreadable files are logged and skipped.
            match self.read_list(&path).await {
                Ok(list) if list.status() == status => infos.push(list.info().clone()),
                Ok(_) => {}
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable list file"),
            }
        }

        Ok(infos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::list::{ListItem, Quantity, Unit};
    use tempfile::TempDir;

    fn groceries() -> ShopList {
        ShopList::new(
            ListId::new(),
            "Groceries".to_string(),
            vec![
                ListItem::new("Eggs", Quantity::whole(12).unwrap(), Unit::Piece),
                ListItem::new("Milk", Quantity::from_tenths(15).unwrap(), Unit::Volume)
                    .with_checked(true),
            ],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_file_store_update_and_find() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileListStore::new(temp_dir.path().join("lists"));
        let list = groceries();

        store.update_list(&list).await.unwrap();

        assert!(store.list_file_path(list.id()).exists());
        assert_eq!(store.find_list(list.id()).await.unwrap(), Some(list));
    }

    #[tokio::test]
    async fn test_file_store_find_missing() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileListStore::new(temp_dir.path());

        assert!(store.find_list(&ListId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_store_lists_with_status_on_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileListStore::new(temp_dir.path().join("never-created"));

        let infos = store.lists_with_status(ListStatus::Active).await.unwrap();

        assert!(infos.is_empty());
    }

    #[tokio::test]
    async fn test_file_store_filters_by_status() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileListStore::new(temp_dir.path());
        let active = groceries();
        let mut archived = ShopList::new(ListId::new(), "Old".to_string(), vec![]).unwrap();
        archived.archive().unwrap();

        store.update_list(&active).await.unwrap();
        store.update_list(&archived).await.unwrap();

        let infos = store.lists_with_status(ListStatus::Archived).await.unwrap();
        assert_eq!(infos.len(), 1);
        assert_eq!(infos[0].id, *archived.id());
    }

    #[tokio::test]
    async fn test_file_store_skips_corrupt_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileListStore::new(temp_dir.path());
        store.update_list(&groceries()).await.unwrap();
        std::fs::write(temp_dir.path().join("broken.yaml"), "info: [").unwrap();
        std::fs::write(temp_dir.path().join("notes.txt"), "ignore me").unwrap();

        let infos = store.lists_with_status(ListStatus::Active).await.unwrap();

        assert_eq!(infos.len(), 1);
    }

    #[tokio::test]
    async fn test_file_store_corrupt_file_fails_lookup() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileListStore::new(temp_dir.path());
        let id = ListId::new();
        std::fs::write(store.list_file_path(&id), "info: [").unwrap();

        let result = store.find_list(&id).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_file_store_delete() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileListStore::new(temp_dir.path());
        let list = groceries();
        store.update_list(&list).await.unwrap();

        store.delete_list(list.id()).await.unwrap();
        store.delete_list(list.id()).await.unwrap();

        assert!(!store.list_file_path(list.id()).exists());
    }
}
