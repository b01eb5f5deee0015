//! File-based Draft Cache Adapter
//!
//! Keeps the unsaved draft in a single YAML file.

use async_trait::async_trait;
use serde_yaml;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::editor::DraftSnapshot;
use crate::ports::{DraftCache, DraftCacheError};

/// Draft slot stored as one YAML file
#[derive(Debug, Clone)]
pub struct FileDraftCache {
    file_path: PathBuf,
}

impl FileDraftCache {
    /// Create a cache backed by `file_path`
    ///
    /// The parent directory is created on first save.
    pub fn new<P: AsRef<Path>>(file_path: P) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }
}

#[async_trait]
impl DraftCache for FileDraftCache {
    async fn save_draft(&self, draft: &DraftSnapshot) -> Result<(), DraftCacheError> {
        if let Some(dir) = self.file_path.parent() {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| DraftCacheError::IoError(e.to_string()))?;
        }

        let yaml = serde_yaml::to_string(draft)
            .map_err(|e| DraftCacheError::SerializationFailed(e.to_string()))?;

        fs::write(&self.file_path, yaml)
            .await
            .map_err(|e| DraftCacheError::IoError(e.to_string()))
    }

    async fn load_draft(&self) -> Result<Option<DraftSnapshot>, DraftCacheError> {
        if !self.file_path.exists() {
            return Ok(None);
        }

        let yaml = fs::read_to_string(&self.file_path)
            .await
            .map_err(|e| DraftCacheError::IoError(e.to_string()))?;

        let draft = serde_yaml::from_str(&yaml)
            .map_err(|e| DraftCacheError::DeserializationFailed(e.to_string()))?;

        Ok(Some(draft))
    }

    async fn clear_draft(&self) -> Result<(), DraftCacheError> {
        if self.file_path.exists() {
            fs::remove_file(&self.file_path)
                .await
                .map_err(|e| DraftCacheError::IoError(e.to_string()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::editor::DraftSnapshotItem;
    use crate::domain::list::{Quantity, Unit};
    use tempfile::TempDir;

    fn party_draft() -> DraftSnapshot {
        DraftSnapshot {
            title: Some("Party".to_string()),
            items: vec![
                DraftSnapshotItem {
                    name: Some("Cake".to_string()),
                    quantity: Some(Quantity::whole(2).unwrap()),
                    unit: Some(Unit::Piece),
                },
                DraftSnapshotItem {
                    name: None,
                    quantity: Some(Quantity::from_tenths(5).unwrap()),
                    unit: Some(Unit::Weight),
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_file_cache_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let cache = FileDraftCache::new(temp_dir.path().join("nested").join("draft.yaml"));

        cache.save_draft(&party_draft()).await.unwrap();

        assert!(cache.file_path().exists());
        assert_eq!(cache.load_draft().await.unwrap(), Some(party_draft()));
    }

    #[tokio::test]
    async fn test_file_cache_empty_slot() {
        let temp_dir = TempDir::new().unwrap();
        let cache = FileDraftCache::new(temp_dir.path().join("draft.yaml"));

        assert!(cache.load_draft().await.unwrap().is_none());
        cache.clear_draft().await.unwrap();
    }

    #[tokio::test]
    async fn test_file_cache_clear_removes_file() {
        let temp_dir = TempDir::new().unwrap();
        let cache = FileDraftCache::new(temp_dir.path().join("draft.yaml"));
        cache.save_draft(&party_draft()).await.unwrap();

        cache.clear_draft().await.unwrap();

        assert!(!cache.file_path().exists());
        assert!(cache.load_draft().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_cache_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let cache = FileDraftCache::new(temp_dir.path().join("draft.yaml"));
        std::fs::write(cache.file_path(), "title: [").unwrap();

        let result = cache.load_draft().await;

        assert!(matches!(
            result,
            Err(DraftCacheError::DeserializationFailed(_))
        ));
    }
}
