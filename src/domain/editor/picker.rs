//! Quantity and unit picker.
//!
//! Opened for one item row by `Directive::OpenQuantityUnitPicker`. Steps and
//! unit switches only change the picker's own value; the row is updated
//! once, when the picker is confirmed with `done`.

use super::Intent;
use crate::domain::foundation::RowId;
use crate::domain::list::{Quantity, Unit};

#[derive(Debug, Clone, PartialEq)]
pub struct QuantityPicker {
    row_id: RowId,
    initial: (Quantity, Unit),
    quantity: Quantity,
    unit: Unit,
    open: bool,
}

impl QuantityPicker {
    pub fn open(row_id: RowId, quantity: Quantity, unit: Unit) -> Self {
        let quantity = quantity.normalized_for(unit);
        Self {
            row_id,
            initial: (quantity, unit),
            quantity,
            unit,
            open: true,
        }
    }

    pub fn row_id(&self) -> RowId {
        self.row_id
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Quantity text for the picker's field.
    pub fn display(&self) -> String {
        self.quantity.to_string()
    }

    pub fn increment(&mut self) {
        self.quantity = self.quantity.increment(self.unit);
    }

    pub fn decrement(&mut self) {
        self.quantity = self.quantity.decrement(self.unit);
    }

    /// Switch units, re-rounding the quantity to the new unit's step.
    pub fn select_unit(&mut self, unit: Unit) {
        self.unit = unit;
        self.quantity = self.quantity.normalized_for(unit);
    }

    /// Free-text entry. Unparsable text counts as 1.
    pub fn type_quantity(&mut self, text: &str) {
        let value = text.trim().replace(',', ".").parse::<f64>().unwrap_or(1.0);
        self.quantity = Quantity::from_f64_for(value, self.unit);
    }

    /// Reset to the unit's smallest quantity.
    pub fn clear(&mut self) {
        self.quantity = Quantity::floor_for(self.unit);
    }

    /// Close the picker. Returns the change for the editor, or `None` when
    /// the value ended where it started.
    pub fn done(&mut self) -> Option<Intent> {
        self.open = false;
        let (quantity, unit) = self.initial;
        if (self.quantity, self.unit) == (quantity, unit) {
            return None;
        }
        Some(Intent::QuantityOrUnitChanged {
            row_id: self.row_id,
            quantity: (self.quantity != quantity).then_some(self.quantity),
            unit: (self.unit != unit).then_some(self.unit),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tenths(t: u32) -> Quantity {
        Quantity::from_tenths(t).unwrap()
    }

    #[test]
    fn weight_decrement_clamps_at_point_one() {
        let mut picker = QuantityPicker::open(RowId::new(), tenths(1), Unit::Weight);
        picker.decrement();
        picker.decrement();
        assert_eq!(picker.quantity(), tenths(1));
        assert_eq!(picker.display(), "0.1");
        assert!(picker.done().is_none());
    }

    #[test]
    fn piece_steps_by_one() {
        let mut picker = QuantityPicker::open(RowId::new(), tenths(20), Unit::Piece);
        picker.increment();
        assert_eq!(picker.display(), "3");
        picker.decrement();
        picker.decrement();
        picker.decrement();
        assert_eq!(picker.display(), "1");
    }

    #[test]
    fn done_reports_only_what_changed() {
        let row_id = RowId::new();
        let mut picker = QuantityPicker::open(row_id, tenths(10), Unit::Piece);
        picker.increment();

        let intent = picker.done();

        assert!(!picker.is_open());
        assert_eq!(
            intent,
            Some(Intent::QuantityOrUnitChanged {
                row_id,
                quantity: Some(tenths(20)),
                unit: None,
            })
        );
    }

    #[test]
    fn switching_to_whole_unit_rounds_quantity() {
        let mut picker = QuantityPicker::open(RowId::new(), tenths(3), Unit::Weight);
        picker.select_unit(Unit::Pack);
        assert_eq!(picker.quantity(), tenths(10));
        assert!(matches!(
            picker.done(),
            Some(Intent::QuantityOrUnitChanged {
                quantity: Some(_),
                unit: Some(Unit::Pack),
                ..
            })
        ));
    }

    #[test]
    fn switching_back_and_forth_is_no_change() {
        let mut picker = QuantityPicker::open(RowId::new(), tenths(20), Unit::Piece);
        picker.select_unit(Unit::Weight);
        picker.select_unit(Unit::Piece);
        assert!(picker.done().is_none());
    }

    #[test]
    fn typed_quantity_is_rounded_to_unit() {
        let mut picker = QuantityPicker::open(RowId::new(), tenths(10), Unit::Volume);
        picker.type_quantity("2,25");
        assert_eq!(picker.display(), "2.3");
        picker.type_quantity("abc");
        assert_eq!(picker.display(), "1");
    }

    #[test]
    fn clear_resets_to_floor() {
        let mut picker = QuantityPicker::open(RowId::new(), tenths(70), Unit::Weight);
        picker.clear();
        assert_eq!(picker.quantity(), tenths(1));
    }
}
