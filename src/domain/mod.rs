//! Domain layer.
//!
//! - `foundation`: ids, errors, timestamps and the state machine trait
//! - `list`: persisted shopping lists and their items
//! - `editor`: the list editing state machine

pub mod editor;
pub mod foundation;
pub mod list;
