//! Intents the screen sends to the list editor.

use crate::domain::foundation::RowId;
use crate::domain::list::{Quantity, Unit};

/// A user action or UI callback, handled one at a time by
/// [`ListEditor::handle`](super::ListEditor::handle).
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Populate the draft. Must be the first intent.
    LoadDraft,
    /// Re-run name validation on one row, or on every row when `None`.
    ValidateAll { changed_row: Option<RowId> },
    /// A title or item text field gained focus.
    BeginEditingTitleOrItem(RowId),
    /// The quantity button of an item row was tapped.
    BeginEditingQuantity(RowId),
    /// A title or item text field finished editing.
    TitleOrItemChanged { row_id: RowId, text: String },
    /// The picker changed quantity and/or unit of an item row.
    QuantityOrUnitChanged {
        row_id: RowId,
        quantity: Option<Quantity>,
        unit: Option<Unit>,
    },
    /// The "add item" row was tapped.
    AddItemRow,
    /// An item row's delete button was tapped.
    DeleteRow(RowId),
    /// The screen finished applying the last row directive.
    UiUpdateAcknowledged,
    /// The save button was tapped.
    Save,
    /// The screen is going away.
    LeaveScreen,
}

impl Intent {
    /// Short name for log fields.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::LoadDraft => "load_draft",
            Intent::ValidateAll { .. } => "validate_all",
            Intent::BeginEditingTitleOrItem(_) => "begin_editing_title_or_item",
            Intent::BeginEditingQuantity(_) => "begin_editing_quantity",
            Intent::TitleOrItemChanged { .. } => "title_or_item_changed",
            Intent::QuantityOrUnitChanged { .. } => "quantity_or_unit_changed",
            Intent::AddItemRow => "add_item_row",
            Intent::DeleteRow(_) => "delete_row",
            Intent::UiUpdateAcknowledged => "ui_update_acknowledged",
            Intent::Save => "save",
            Intent::LeaveScreen => "leave_screen",
        }
    }
}
