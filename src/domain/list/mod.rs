//! Shopping list domain module.
//!
//! Persisted lists, their items, and the quantity/unit value objects the
//! editor and the picker work with.

mod aggregate;
mod errors;
mod item;
mod quantity;
mod unit;

pub use aggregate::{ListInfo, ShopList, SortOrder};
pub use errors::ListError;
pub use item::ListItem;
pub use quantity::{Quantity, MAX_QUANTITY_TENTHS};
pub use unit::Unit;
