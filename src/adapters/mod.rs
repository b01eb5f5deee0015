//! Adapters - Implementations of ports.
//!
//! - `storage` - list store and draft cache backends

pub mod storage;
