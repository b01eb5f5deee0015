//! A single persisted list item.

use serde::{Deserialize, Serialize};

use super::{Quantity, Unit};

/// One line of a stored shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    pub name: String,
    pub quantity: Quantity,
    pub unit: Unit,
    #[serde(default)]
    pub checked: bool,
}

impl ListItem {
    /// Creates an unchecked item.
    pub fn new(name: impl Into<String>, quantity: Quantity, unit: Unit) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.normalized_for(unit),
            unit,
            checked: false,
        }
    }

    /// Returns a copy with the given checked state.
    #[must_use]
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}
