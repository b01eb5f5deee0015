//! Application layer - Commands, Queries, Handlers and the editor session.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod editor_session;
pub mod handlers;

pub use editor_session::{EditorEvent, EditorHandle, INTENT_QUEUE_CAPACITY};
pub use handlers::list::{
    ArchiveListCommand, ArchiveListHandler, CheckAllCommand, CheckAllHandler, CheckItemCommand,
    CheckItemHandler, DeleteListCommand, DeleteListHandler, GetListsHandler, GetListsQuery,
    MoveItemCommand, MoveItemHandler, RemoveCheckedCommand, RemoveCheckedHandler,
    RemoveItemCommand, RemoveItemHandler, RestoreListCommand, RestoreListHandler,
    SortItemsCommand, SortItemsHandler, TogglePinCommand, TogglePinHandler,
};
