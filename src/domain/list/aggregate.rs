//! Shopping list aggregate.
//!
//! A list is its header ([`ListInfo`]) plus an ordered set of items.
//! The editor produces new contents; the overview screens pin, archive,
//! restore and check items off.

use serde::{Deserialize, Serialize};

use super::ListItem;
use crate::domain::foundation::{
    DomainError, ErrorCode, ListId, ListStatus, StateMachine, Timestamp,
};

/// Direction for sorting a list's unchecked items by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// The order the next press of the sort button applies.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Header data shown for a list on the overview screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListInfo {
    pub id: ListId,
    pub title: String,
    pub created_at: Timestamp,
    pub status: ListStatus,
    pub pinned: bool,
}

/// Shopping list aggregate.
///
/// # Invariants
///
/// - `title` is non-blank
/// - Archived lists are never pinned after a restore
/// - Archived lists cannot be pinned, reordered or have items checked
/// - Items are only dragged between unchecked positions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopList {
    info: ListInfo,
    items: Vec<ListItem>,
}

impl ShopList {
    /// Create a new active, unpinned list.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if title is blank
    pub fn new(id: ListId, title: String, items: Vec<ListItem>) -> Result<Self, DomainError> {
        Self::validate_title(&title)?;
        Ok(Self {
            info: ListInfo {
                id,
                title,
                created_at: Timestamp::now(),
                status: ListStatus::Active,
                pinned: false,
            },
            items,
        })
    }

    /// Reconstitute a list from persistence (no validation).
    pub fn reconstitute(info: ListInfo, items: Vec<ListItem>) -> Self {
        Self { info, items }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &ListId {
        &self.info.id
    }

    pub fn title(&self) -> &str {
        &self.info.title
    }

    pub fn info(&self) -> &ListInfo {
        &self.info
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn status(&self) -> ListStatus {
        self.info.status
    }

    pub fn is_pinned(&self) -> bool {
        self.info.pinned
    }

    /// Number of items still to buy.
    pub fn unchecked_count(&self) -> usize {
        self.items.iter().filter(|item| !item.checked).count()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace title and items, keeping id, creation date, pin and status.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if title is blank
    pub fn replace_contents(
        &mut self,
        title: String,
        items: Vec<ListItem>,
    ) -> Result<(), DomainError> {
        Self::validate_title(&title)?;
        self.info.title = title;
        self.items = items;
        Ok(())
    }

    /// Flip the pinned flag, returning the new value.
    ///
    /// # Errors
    ///
    /// - `ListArchived` if the list is archived
    pub fn toggle_pin(&mut self) -> Result<bool, DomainError> {
        self.ensure_mutable()?;
        self.info.pinned = !self.info.pinned;
        Ok(self.info.pinned)
    }

    /// Mark the list as completed.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if already archived
    pub fn archive(&mut self) -> Result<(), DomainError> {
        self.info.status = self.transition(ListStatus::Archived)?;
        Ok(())
    }

    /// Bring an archived list back: active, unpinned, every item unchecked.
    ///
    /// # Errors
    ///
    /// - `InvalidStateTransition` if the list is already active
    pub fn restore(&mut self) -> Result<(), DomainError> {
        self.info.status = self.transition(ListStatus::Active)?;
        self.info.pinned = false;
        for item in &mut self.items {
            item.checked = false;
        }
        Ok(())
    }

    /// Check or uncheck one item. Returns true if the state changed.
    ///
    /// # Errors
    ///
    /// - `ListArchived` if the list is archived
    /// - `ItemNotFound` if `index` is out of bounds
    pub fn set_item_checked(&mut self, index: usize, checked: bool) -> Result<bool, DomainError> {
        self.ensure_mutable()?;
        let changed = self.item(index)?.checked != checked;
        self.items[index].checked = checked;
        Ok(changed)
    }

    /// Check or uncheck every item. Returns how many items changed.
    ///
    /// # Errors
    ///
    /// - `ListArchived` if the list is archived
    pub fn set_all_checked(&mut self, checked: bool) -> Result<usize, DomainError> {
        self.ensure_mutable()?;
        let mut changed = 0;
        for item in self.items.iter_mut().filter(|item| item.checked != checked) {
            item.checked = checked;
            changed += 1;
        }
        Ok(changed)
    }

    /// Sort unchecked items by name; checked items follow in their
    /// current order.
    ///
    /// # Errors
    ///
    /// - `ListArchived` if the list is archived
    pub fn sort_items(&mut self, order: SortOrder) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        let (mut unchecked, checked): (Vec<_>, Vec<_>) =
            self.items.drain(..).partition(|item| !item.checked);
        unchecked.sort_by(|a, b| match order {
            SortOrder::Ascending => a.name.cmp(&b.name),
            SortOrder::Descending => b.name.cmp(&a.name),
        });
        self.items = unchecked;
        self.items.extend(checked);
        Ok(())
    }

    /// Drag the item at `from` to position `to`.
    ///
    /// # Errors
    ///
    /// - `ListArchived` if the list is archived
    /// - `ItemNotFound` if either index is out of bounds
    /// - `MoveNotAllowed` if either position holds a checked item
    pub fn move_item(&mut self, from: usize, to: usize) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        let from_checked = self.item(from)?.checked;
        let to_checked = self.item(to)?.checked;
        if from_checked || to_checked {
            return Err(DomainError::new(
                ErrorCode::MoveNotAllowed,
                format!("Cannot move item {} to position {}", from, to),
            ));
        }
        if from != to {
            let item = self.items.remove(from);
            self.items.insert(to, item);
        }
        Ok(())
    }

    /// Delete one item, returning it.
    ///
    /// # Errors
    ///
    /// - `ListArchived` if the list is archived
    /// - `ItemNotFound` if `index` is out of bounds
    pub fn remove_item(&mut self, index: usize) -> Result<ListItem, DomainError> {
        self.ensure_mutable()?;
        self.item(index)?;
        Ok(self.items.remove(index))
    }

    /// Delete every checked item. Returns how many were removed.
    ///
    /// # Errors
    ///
    /// - `ListArchived` if the list is archived
    pub fn remove_checked(&mut self) -> Result<usize, DomainError> {
        self.ensure_mutable()?;
        let before = self.items.len();
        self.items.retain(|item| !item.checked);
        Ok(before - self.items.len())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn item(&self, index: usize) -> Result<&ListItem, DomainError> {
        self.items.get(index).ok_or_else(|| {
            DomainError::new(ErrorCode::ItemNotFound, format!("No item at position {}", index))
        })
    }

    fn transition(&self, target: ListStatus) -> Result<ListStatus, DomainError> {
        self.info.status.transition_to(target).map_err(|e| {
            DomainError::new(ErrorCode::InvalidStateTransition, e.to_string())
        })
    }

    fn ensure_mutable(&self) -> Result<(), DomainError> {
        if self.info.status.is_mutable() {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::ListArchived,
                "Cannot modify an archived list",
            ))
        }
    }

    fn validate_title(title: &str) -> Result<(), DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::validation("title", "Title cannot be empty"));
        }
        Ok(())
    }
}
