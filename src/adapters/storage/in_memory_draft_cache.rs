//! In-Memory Draft Cache Adapter

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::editor::DraftSnapshot;
use crate::ports::{DraftCache, DraftCacheError};

/// Draft slot held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryDraftCache {
    slot: Arc<RwLock<Option<DraftSnapshot>>>,
}

impl InMemoryDraftCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if a draft is cached
    pub async fn is_occupied(&self) -> bool {
        self.slot.read().await.is_some()
    }
}

#[async_trait]
impl DraftCache for InMemoryDraftCache {
    async fn save_draft(&self, draft: &DraftSnapshot) -> Result<(), DraftCacheError> {
        *self.slot.write().await = Some(draft.clone());
        Ok(())
    }

    async fn load_draft(&self) -> Result<Option<DraftSnapshot>, DraftCacheError> {
        Ok(self.slot.read().await.clone())
    }

    async fn clear_draft(&self) -> Result<(), DraftCacheError> {
        *self.slot.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_cache_single_slot() {
        let cache = InMemoryDraftCache::new();
        let first = DraftSnapshot {
            title: Some("First".to_string()),
            items: vec![],
        };
        let second = DraftSnapshot {
            title: Some("Second".to_string()),
            items: vec![],
        };

        cache.save_draft(&first).await.unwrap();
        cache.save_draft(&second).await.unwrap();

        assert_eq!(cache.load_draft().await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_memory_cache_clear() {
        let cache = InMemoryDraftCache::new();
        cache.save_draft(&DraftSnapshot::default()).await.unwrap();

        cache.clear_draft().await.unwrap();
        cache.clear_draft().await.unwrap();

        assert!(!cache.is_occupied().await);
        assert!(cache.load_draft().await.unwrap().is_none());
    }
}
