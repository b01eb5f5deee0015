//! In-memory draft of a list being created or edited.

use serde::{Deserialize, Serialize};

use super::{EditorError, ListDraftRow, RowKind};
use crate::domain::foundation::RowId;
use crate::domain::list::{ListItem, Quantity, ShopList, Unit};

/// Unsaved create-mode input, as kept by the draft cache.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DraftSnapshot {
    pub title: Option<String>,
    #[serde(default)]
    pub items: Vec<DraftSnapshotItem>,
}

/// One cached item row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftSnapshotItem {
    pub name: Option<String>,
    pub quantity: Option<Quantity>,
    pub unit: Option<Unit>,
}

/// Ordered rows of a draft: title row, item rows, then the button row.
///
/// # Invariants
///
/// - Row 0 is the title row and is never removed
/// - The last row is the button row and is never removed or edited
/// - Row ids are unique for the lifetime of the draft
#[derive(Debug, Clone, PartialEq)]
pub struct ListDraft {
    rows: Vec<ListDraftRow>,
}

impl ListDraft {
    /// Untitled draft with no items.
    pub fn empty() -> Self {
        Self::with_items(ListDraftRow::title_row(None), Vec::new())
    }

    /// Draft of an existing list, for edit mode.
    pub fn from_list(list: &ShopList) -> Self {
        Self::from_parts(list.title(), list.items())
    }

    /// Draft from a stored title and items.
    pub fn from_parts(title: &str, items: &[ListItem]) -> Self {
        let rows = items
            .iter()
            .map(|item| {
                ListDraftRow::item_row(
                    Some(item.name.clone()),
                    Some(item.quantity),
                    Some(item.unit),
                    item.checked,
                )
            })
            .collect();
        Self::with_items(ListDraftRow::title_row(Some(title.to_string())), rows)
    }

    /// Draft restored from the draft cache.
    pub fn from_snapshot(snapshot: DraftSnapshot) -> Self {
        let rows = snapshot
            .items
            .into_iter()
            .map(|item| ListDraftRow::item_row(item.name, item.quantity, item.unit, false))
            .collect();
        Self::with_items(ListDraftRow::title_row(snapshot.title), rows)
    }

    fn with_items(title: ListDraftRow, items: Vec<ListDraftRow>) -> Self {
        let mut rows = Vec::with_capacity(items.len() + 2);
        rows.push(title);
        rows.extend(items);
        rows.push(ListDraftRow::button_row());
        Self { rows }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn rows(&self) -> &[ListDraftRow] {
        &self.rows
    }

    /// Row count, never less than two (title and button).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn title_row(&self) -> &ListDraftRow {
        &self.rows[0]
    }

    pub fn item_rows(&self) -> &[ListDraftRow] {
        &self.rows[1..self.rows.len() - 1]
    }

    pub fn button_row(&self) -> &ListDraftRow {
        &self.rows[self.rows.len() - 1]
    }

    pub fn index_of(&self, id: RowId) -> Option<usize> {
        self.rows.iter().position(|row| row.id == id)
    }

    pub fn row(&self, id: RowId) -> Option<&ListDraftRow> {
        self.rows.iter().find(|row| row.id == id)
    }

    pub fn kind_at(&self, index: usize) -> RowKind {
        RowKind::for_index(index, self.rows.len())
    }

    /// Kind and index of a row.
    ///
    /// # Errors
    ///
    /// - `UnknownRow` if the id is not in the draft
    pub fn locate(&self, id: RowId) -> Result<(usize, RowKind), EditorError> {
        self.index_of(id)
            .map(|index| (index, self.kind_at(index)))
            .ok_or(EditorError::UnknownRow(id))
    }

    /// Height of the row at `index`, or `None` past the end.
    pub fn row_height(&self, index: usize) -> Option<u16> {
        self.rows
            .get(index)
            .map(|row| self.kind_at(index).height(row.error.is_some()))
    }

    /// Completion readiness: every row before the button has a non-empty
    /// title and no error.
    pub fn is_ready(&self) -> bool {
        self.rows[..self.rows.len() - 1]
            .iter()
            .all(|row| row.has_title() && row.error.is_none())
    }

    /// True if the user entered anything worth caching.
    pub fn has_input(&self) -> bool {
        self.title_row().title.is_some() || !self.item_rows().is_empty()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Mutable access to a title or item row.
    ///
    /// # Errors
    ///
    /// - `UnknownRow` if the id is not in the draft
    /// - `ProtectedRow` if the id is the button row
    pub fn editable_row_mut(&mut self, id: RowId) -> Result<&mut ListDraftRow, EditorError> {
        let (index, kind) = self.locate(id)?;
        if kind == RowKind::Button {
            return Err(EditorError::ProtectedRow(id));
        }
        Ok(&mut self.rows[index])
    }

    /// Mutable access to an item row.
    ///
    /// # Errors
    ///
    /// - `UnknownRow` if the id is not in the draft
    /// - `ProtectedRow` if the id is the title or button row
    pub fn item_row_mut(&mut self, id: RowId) -> Result<&mut ListDraftRow, EditorError> {
        let (index, kind) = self.locate(id)?;
        if kind != RowKind::Item {
            return Err(EditorError::ProtectedRow(id));
        }
        Ok(&mut self.rows[index])
    }

    /// Insert a row right before the button row, returning its index.
    pub fn insert_item(&mut self, row: ListDraftRow) -> usize {
        let index = self.rows.len() - 1;
        self.rows.insert(index, row);
        index
    }

    /// Remove an item row, returning the index it occupied.
    ///
    /// # Errors
    ///
    /// - `UnknownRow` if the id is not in the draft
    /// - `ProtectedRow` if the id is the title or button row
    pub fn remove_item(&mut self, id: RowId) -> Result<usize, EditorError> {
        let (index, kind) = self.locate(id)?;
        if kind != RowKind::Item {
            return Err(EditorError::ProtectedRow(id));
        }
        self.rows.remove(index);
        Ok(index)
    }

    /// Ids of the title row and every item row.
    pub fn editable_ids(&self) -> Vec<RowId> {
        self.rows[..self.rows.len() - 1]
            .iter()
            .map(|row| row.id)
            .collect()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Conversions
    // ─────────────────────────────────────────────────────────────────────────

    /// The list title as it would be saved.
    pub fn title_text(&self) -> String {
        self.title_row().title.clone().unwrap_or_default()
    }

    /// Item rows as persisted items.
    pub fn to_items(&self) -> Vec<ListItem> {
        self.item_rows()
            .iter()
            .map(|row| {
                ListItem::new(
                    row.title.clone().unwrap_or_default(),
                    row.effective_quantity(),
                    row.effective_unit(),
                )
                .with_checked(row.checked)
            })
            .collect()
    }

    pub fn to_snapshot(&self) -> DraftSnapshot {
        DraftSnapshot {
            title: self.title_row().title.clone(),
            items: self
                .item_rows()
                .iter()
                .map(|row| DraftSnapshotItem {
                    name: row.title.clone(),
                    quantity: row.quantity,
                    unit: row.unit,
                })
                .collect(),
        }
    }
}

impl Default for ListDraft {
    fn default() -> Self {
        Self::empty()
    }
}
