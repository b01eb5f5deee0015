//! Quantity value object with unit-dependent precision.
//!
//! Stored as a whole number of tenths so that stepping and clamping are
//! exact: `0.1` is `1`, `1000` is `10_000`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Unit;
use crate::domain::foundation::ValidationError;

/// Largest quantity, in tenths, for every unit.
pub const MAX_QUANTITY_TENTHS: u32 = 10_000;

/// A strictly positive amount of an item, at most 1000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct Quantity(u32);

impl Quantity {
    /// The default quantity of a freshly added item.
    pub const ONE: Quantity = Quantity(10);

    /// Creates a quantity from tenths.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the value is zero or above 1000
    pub fn from_tenths(tenths: u32) -> Result<Self, ValidationError> {
        if tenths == 0 || tenths > MAX_QUANTITY_TENTHS {
            return Err(ValidationError::out_of_range(
                "quantity",
                0.1,
                f64::from(MAX_QUANTITY_TENTHS) / 10.0,
                f64::from(tenths) / 10.0,
            ));
        }
        Ok(Self(tenths))
    }

    /// Creates a whole quantity.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if `count` is zero or above 1000
    pub fn whole(count: u32) -> Result<Self, ValidationError> {
        Self::from_tenths(count.saturating_mul(10))
    }

    /// Builds a quantity from an arbitrary number, rounded to one decimal and
    /// then fitted to the unit's precision and bounds.
    pub fn from_f64_for(value: f64, unit: Unit) -> Self {
        let tenths = if value.is_finite() && value > 0.0 {
            (value * 10.0).round().min(f64::from(MAX_QUANTITY_TENTHS)) as u32
        } else {
            0
        };
        Self(tenths).normalized_for(unit)
    }

    /// Smallest quantity allowed for a unit.
    pub fn floor_for(unit: Unit) -> Self {
        Self(unit.floor_tenths())
    }

    /// Returns the value in tenths.
    pub fn tenths(&self) -> u32 {
        self.0
    }

    /// Returns the value as a float.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0) / 10.0
    }

    /// Returns true if there is no fractional part.
    pub fn is_whole(&self) -> bool {
        self.0 % 10 == 0
    }

    /// Fits this quantity to a unit: whole units round half up to an
    /// integer, and every unit clamps to `[floor, 1000]`.
    #[must_use]
    pub fn normalized_for(self, unit: Unit) -> Self {
        let tenths = if unit.is_fractional() {
            self.0
        } else {
            (self.0 + 5) / 10 * 10
        };
        Self(tenths.clamp(unit.floor_tenths(), MAX_QUANTITY_TENTHS))
    }

    /// One picker step up, capped at 1000. Whole units round down.
    #[must_use]
    pub fn increment(self, unit: Unit) -> Self {
        let raised = (self.0 + unit.step_tenths()).min(MAX_QUANTITY_TENTHS);
        if unit.is_fractional() {
            Self(raised)
        } else {
            Self((raised / 10 * 10).max(unit.floor_tenths()))
        }
    }

    /// One picker step down, never below the unit's floor. Whole units round up.
    #[must_use]
    pub fn decrement(self, unit: Unit) -> Self {
        let lowered = self
            .0
            .saturating_sub(unit.step_tenths())
            .max(unit.floor_tenths());
        if unit.is_fractional() {
            Self(lowered)
        } else {
            Self((lowered + 9) / 10 * 10)
        }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole() {
            write!(f, "{}", self.0 / 10)
        } else {
            write!(f, "{}.{}", self.0 / 10, self.0 % 10)
        }
    }
}

impl From<Quantity> for f64 {
    fn from(quantity: Quantity) -> Self {
        quantity.as_f64()
    }
}

impl TryFrom<f64> for Quantity {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format("quantity", "not a finite number"));
        }
        let tenths = (value * 10.0).round();
        if tenths < 1.0 || tenths > f64::from(MAX_QUANTITY_TENTHS) {
            return Err(ValidationError::out_of_range("quantity", 0.1, 1000.0, value));
        }
        Self::from_tenths(tenths as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn q(tenths: u32) -> Quantity {
        Quantity::from_tenths(tenths).unwrap()
    }

    #[test]
    fn rejects_zero_and_above_max() {
        assert!(Quantity::from_tenths(0).is_err());
        assert!(Quantity::from_tenths(10_001).is_err());
        assert!(Quantity::whole(1000).is_ok());
    }

    #[test]
    fn weight_decrement_stays_at_floor() {
        let floor = q(1);
        assert_eq!(floor.decrement(Unit::Weight), floor);
        assert_eq!(q(5).decrement(Unit::Weight), q(4));
    }

    #[test]
    fn weight_increment_caps_at_max() {
        assert_eq!(q(10_000).increment(Unit::Volume), q(10_000));
        assert_eq!(q(9).increment(Unit::Volume), q(10));
    }

    #[test]
    fn piece_decrement_rounds_up() {
        assert_eq!(q(25).decrement(Unit::Piece), q(20));
        assert_eq!(q(10).decrement(Unit::Piece), q(10));
        assert_eq!(q(5).decrement(Unit::Pack), q(10));
    }

    #[test]
    fn piece_increment_rounds_down() {
        assert_eq!(q(25).increment(Unit::Piece), q(30));
        assert_eq!(q(9_995).increment(Unit::Piece), q(10_000));
    }

    #[test]
    fn normalizing_to_whole_unit_rounds_half_up() {
        assert_eq!(q(25).normalized_for(Unit::Piece), q(30));
        assert_eq!(q(24).normalized_for(Unit::Piece), q(20));
        assert_eq!(q(3).normalized_for(Unit::Pack), q(10));
        assert_eq!(q(3).normalized_for(Unit::Weight), q(3));
    }

    #[test]
    fn from_f64_rounds_to_one_decimal() {
        assert_eq!(Quantity::from_f64_for(0.26, Unit::Weight), q(3));
        assert_eq!(Quantity::from_f64_for(-4.0, Unit::Weight), q(1));
        assert_eq!(Quantity::from_f64_for(f64::NAN, Unit::Piece), q(10));
        assert_eq!(Quantity::from_f64_for(5000.0, Unit::Piece), q(10_000));
    }

    #[test]
    fn displays_whole_numbers_without_decimal() {
        assert_eq!(q(30).to_string(), "3");
        assert_eq!(q(5).to_string(), "0.5");
        assert_eq!(q(125).to_string(), "12.5");
    }

    #[test]
    fn serializes_as_plain_number() {
        assert_eq!(serde_json::to_string(&q(125)).unwrap(), "12.5");
        let parsed: Quantity = serde_json::from_str("12").unwrap();
        assert_eq!(parsed, q(120));
        assert!(serde_json::from_str::<Quantity>("0").is_err());
    }

    proptest! {
        #[test]
        fn stepping_never_leaves_unit_bounds(start in 1u32..=10_000, steps in proptest::collection::vec(any::<bool>(), 0..50), unit_index in 0usize..4) {
            let unit = Unit::ALL[unit_index];
            let mut quantity = q(start).normalized_for(unit);
            for up in steps {
                quantity = if up { quantity.increment(unit) } else { quantity.decrement(unit) };
                prop_assert!(quantity.tenths() >= unit.floor_tenths());
                prop_assert!(quantity.tenths() <= MAX_QUANTITY_TENTHS);
                if !unit.is_fractional() {
                    prop_assert!(quantity.is_whole());
                }
            }
        }
    }
}
