//! Storage Adapters
//!
//! Implementations of the `ListStore` and `DraftCache` ports.
//!
//! ## Available Adapters
//!
//! - **FileListStore** / **FileDraftCache** - YAML files on disk
//! - **InMemoryListStore** / **InMemoryDraftCache** - process memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use shopping_list::adapters::storage::build_storage;
//! use shopping_list::config::StorageConfig;
//!
//! let ports = build_storage(&StorageConfig::file("./data"));
//! let editor = ListEditor::create(ports.list_store, ports.draft_cache);
//! ```

mod file_draft_cache;
mod file_list_store;
mod in_memory_draft_cache;
mod in_memory_list_store;

pub use file_draft_cache::FileDraftCache;
pub use file_list_store::FileListStore;
pub use in_memory_draft_cache::InMemoryDraftCache;
pub use in_memory_list_store::InMemoryListStore;

use std::sync::Arc;

use tracing::info;

use crate::config::{StorageBackend, StorageConfig};
use crate::ports::{DraftCache, ListStore};

/// The storage ports an editor or handler is built from
#[derive(Clone)]
pub struct StoragePorts {
    pub list_store: Arc<dyn ListStore>,
    pub draft_cache: Arc<dyn DraftCache>,
}

/// Build the storage ports for the configured backend
pub fn build_storage(config: &StorageConfig) -> StoragePorts {
    info!(backend = ?config.backend, data_dir = %config.data_dir.display(), "Building storage");
    match config.backend {
        StorageBackend::Memory => StoragePorts {
            list_store: Arc::new(InMemoryListStore::new()),
            draft_cache: Arc::new(InMemoryDraftCache::new()),
        },
        StorageBackend::File => StoragePorts {
            list_store: Arc::new(FileListStore::new(config.lists_dir())),
            draft_cache: Arc::new(FileDraftCache::new(config.draft_path())),
        },
    }
}
