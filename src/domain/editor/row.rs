//! Rows of a list draft.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::RowId;
use crate::domain::list::{Quantity, Unit};

/// Row heights in points, as laid out by the list screen.
pub const TITLE_ROW_HEIGHT: u16 = 60;
pub const TITLE_ROW_HEIGHT_WITH_ERROR: u16 = 87;
pub const ITEM_ROW_HEIGHT: u16 = 52;
pub const ITEM_ROW_HEIGHT_WITH_ERROR: u16 = 81;
pub const BUTTON_ROW_HEIGHT: u16 = 76;

/// What a row is, derived purely from its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// Row 0: the list's own name.
    Title,
    /// Any row between the title and the button.
    Item,
    /// Trailing synthetic "add item" row.
    Button,
}

impl RowKind {
    /// Kind of the row at `index` in a draft of `row_count` rows.
    pub fn for_index(index: usize, row_count: usize) -> Self {
        if index == 0 {
            RowKind::Title
        } else if index + 1 == row_count {
            RowKind::Button
        } else {
            RowKind::Item
        }
    }

    /// Visual height; rows carrying an error leave room for the caption.
    pub fn height(&self, has_error: bool) -> u16 {
        match (self, has_error) {
            (RowKind::Title, false) => TITLE_ROW_HEIGHT,
            (RowKind::Title, true) => TITLE_ROW_HEIGHT_WITH_ERROR,
            (RowKind::Item, false) => ITEM_ROW_HEIGHT,
            (RowKind::Item, true) => ITEM_ROW_HEIGHT_WITH_ERROR,
            (RowKind::Button, _) => BUTTON_ROW_HEIGHT,
        }
    }
}

/// Inline validation error attached to a title or item row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("A list with this name already exists")]
    DuplicateName,
    #[error("Name cannot consist of spaces only")]
    InvalidName,
}

/// One editable row in the in-progress list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListDraftRow {
    pub id: RowId,
    /// `None` until the user has typed into the row.
    pub title: Option<String>,
    pub quantity: Option<Quantity>,
    pub unit: Option<Unit>,
    pub checked: bool,
    pub error: Option<NameError>,
    /// Ask the screen to focus this row's text input once rendered.
    pub start_editing: bool,
}

impl ListDraftRow {
    fn blank() -> Self {
        Self {
            id: RowId::new(),
            title: None,
            quantity: None,
            unit: None,
            checked: false,
            error: None,
            start_editing: false,
        }
    }

    /// The list-name row.
    pub fn title_row(title: Option<String>) -> Self {
        Self {
            title,
            ..Self::blank()
        }
    }

    /// An item row populated from stored or cached data.
    pub fn item_row(
        name: Option<String>,
        quantity: Option<Quantity>,
        unit: Option<Unit>,
        checked: bool,
    ) -> Self {
        let unit = unit.unwrap_or_default();
        Self {
            title: name,
            quantity: quantity.map(|q| q.normalized_for(unit)),
            unit: Some(unit),
            checked,
            ..Self::blank()
        }
    }

    /// A freshly added item: one piece, focused on render.
    pub fn new_item_row() -> Self {
        Self {
            quantity: Some(Quantity::ONE),
            unit: Some(Unit::Piece),
            start_editing: true,
            ..Self::blank()
        }
    }

    /// The trailing "add item" row.
    pub fn button_row() -> Self {
        Self::blank()
    }

    /// True if the title is present and non-empty.
    pub fn has_title(&self) -> bool {
        self.title.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Quantity shown in the picker, defaulting to one.
    pub fn effective_quantity(&self) -> Quantity {
        let unit = self.effective_unit();
        self.quantity.unwrap_or(Quantity::ONE).normalized_for(unit)
    }

    pub fn effective_unit(&self) -> Unit {
        self.unit.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_is_derived_from_position() {
        assert_eq!(RowKind::for_index(0, 2), RowKind::Title);
        assert_eq!(RowKind::for_index(1, 2), RowKind::Button);
        assert_eq!(RowKind::for_index(1, 4), RowKind::Item);
        assert_eq!(RowKind::for_index(2, 4), RowKind::Item);
        assert_eq!(RowKind::for_index(3, 4), RowKind::Button);
    }

    #[test]
    fn error_rows_are_taller() {
        assert!(RowKind::Title.height(true) > RowKind::Title.height(false));
        assert!(RowKind::Item.height(true) > RowKind::Item.height(false));
        assert_eq!(RowKind::Button.height(true), RowKind::Button.height(false));
    }

    #[test]
    fn new_item_row_requests_focus() {
        let row = ListDraftRow::new_item_row();
        assert!(row.start_editing);
        assert_eq!(row.quantity, Some(Quantity::ONE));
        assert_eq!(row.unit, Some(Unit::Piece));
        assert!(!row.has_title());
    }

    #[test]
    fn empty_string_is_not_a_title() {
        assert!(!ListDraftRow::title_row(Some(String::new())).has_title());
        assert!(ListDraftRow::title_row(Some(" ".to_string())).has_title());
    }

    #[test]
    fn item_row_normalizes_quantity_to_unit() {
        let row = ListDraftRow::item_row(
            Some("Bread".to_string()),
            Some(Quantity::from_tenths(15).unwrap()),
            Some(Unit::Pack),
            false,
        );
        assert_eq!(row.quantity, Some(Quantity::whole(2).unwrap()));
    }

    #[test]
    fn name_error_messages() {
        assert_eq!(NameError::EmptyName.to_string(), "Name cannot be empty");
        assert_eq!(
            serde_json::to_string(&NameError::DuplicateName).unwrap(),
            "\"duplicate_name\""
        );
    }
}
