//! UI-update directives emitted by the list editor.

use crate::domain::foundation::RowId;
use crate::domain::list::{Quantity, Unit};

/// An instruction for the rendering layer.
///
/// Every directive that changes rows leaves the editor busy until the
/// screen sends back `Intent::UiUpdateAcknowledged`.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// Redraw every row.
    ReloadAll,
    /// Redraw the given rows in place.
    UpdateRows { ids: Vec<RowId>, animated: bool },
    /// A row was inserted at `index`.
    InsertRow { index: usize, id: RowId },
    /// The row that sat at `index` was removed.
    RemoveRow { index: usize, id: RowId },
    /// Enable or disable the save action.
    UpdateSaveButtonState { enabled: bool },
    /// Show the quantity and unit picker for an item row.
    OpenQuantityUnitPicker {
        row_id: RowId,
        quantity: Quantity,
        unit: Unit,
    },
    /// The list was saved; leave the screen.
    NavigateBack,
}

impl Directive {
    /// True if the screen must acknowledge this directive once applied.
    pub fn needs_acknowledgement(&self) -> bool {
        matches!(
            self,
            Directive::UpdateRows { .. } | Directive::InsertRow { .. } | Directive::RemoveRow { .. }
        )
    }
}
