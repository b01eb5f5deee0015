//! List command and query handlers.

mod archive_list;
mod check_items;
mod delete_list;
mod get_lists;
mod remove_items;
mod reorder_items;
mod toggle_pin;

pub use archive_list::{
    ArchiveListCommand, ArchiveListHandler, RestoreListCommand, RestoreListHandler,
};
pub use check_items::{CheckAllCommand, CheckAllHandler, CheckItemCommand, CheckItemHandler};
pub use delete_list::{DeleteListCommand, DeleteListHandler};
pub use get_lists::{GetListsHandler, GetListsQuery};
pub use remove_items::{
    RemoveCheckedCommand, RemoveCheckedHandler, RemoveItemCommand, RemoveItemHandler,
};
pub use reorder_items::{MoveItemCommand, MoveItemHandler, SortItemsCommand, SortItemsHandler};
pub use toggle_pin::{TogglePinCommand, TogglePinHandler};

use crate::domain::foundation::{DomainError, ErrorCode, ListId};
use crate::domain::list::ListError;

/// Attach the list and position to an out-of-range item error.
fn item_error(err: DomainError, list_id: ListId, index: usize) -> ListError {
    match err.code {
        ErrorCode::ItemNotFound => ListError::item_not_found(list_id, index),
        _ => err.into(),
    }
}
