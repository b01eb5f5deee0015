//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `ListStore` - Persisted shopping lists
//! - `DraftCache` - Single slot for the unsaved create-mode draft

mod draft_cache;
mod list_store;

pub use draft_cache::{DraftCache, DraftCacheError};
pub use list_store::{ListContents, ListStore};
