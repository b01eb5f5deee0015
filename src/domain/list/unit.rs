//! Measurement units for list items.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Unit an item's quantity is measured in.
///
/// Weight and volume are measured to one decimal place; packs and pieces
/// are counted in whole numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Weight,
    Volume,
    Pack,
    #[default]
    Piece,
}

impl Unit {
    /// All units in picker order.
    pub const ALL: [Unit; 4] = [Unit::Weight, Unit::Volume, Unit::Pack, Unit::Piece];

    /// Returns true if quantities in this unit carry one decimal place.
    pub fn is_fractional(&self) -> bool {
        matches!(self, Unit::Weight | Unit::Volume)
    }

    /// Step size in tenths used by the quantity picker.
    pub fn step_tenths(&self) -> u32 {
        if self.is_fractional() {
            1
        } else {
            10
        }
    }

    /// Smallest allowed quantity in tenths.
    pub fn floor_tenths(&self) -> u32 {
        self.step_tenths()
    }

    /// Position of this unit in the picker's segmented control.
    pub fn picker_index(&self) -> usize {
        match self {
            Unit::Weight => 0,
            Unit::Volume => 1,
            Unit::Pack => 2,
            Unit::Piece => 3,
        }
    }

    /// Unit at a picker position, if any.
    pub fn from_picker_index(index: usize) -> Option<Unit> {
        Self::ALL.get(index).copied()
    }

    fn as_str(&self) -> &'static str {
        match self {
            Unit::Weight => "weight",
            Unit::Volume => "volume",
            Unit::Pack => "pack",
            Unit::Piece => "piece",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Unit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::invalid_format("unit", format!("unknown unit '{}'", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_unit_is_piece() {
        assert_eq!(Unit::default(), Unit::Piece);
    }

    #[test]
    fn weight_and_volume_are_fractional() {
        assert!(Unit::Weight.is_fractional());
        assert!(Unit::Volume.is_fractional());
        assert!(!Unit::Pack.is_fractional());
        assert!(!Unit::Piece.is_fractional());
    }

    #[test]
    fn step_sizes_follow_precision() {
        assert_eq!(Unit::Weight.step_tenths(), 1);
        assert_eq!(Unit::Piece.step_tenths(), 10);
    }

    #[test]
    fn picker_index_round_trips() {
        for unit in Unit::ALL {
            assert_eq!(Unit::from_picker_index(unit.picker_index()), Some(unit));
        }
        assert_eq!(Unit::from_picker_index(4), None);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Volume".parse::<Unit>().unwrap(), Unit::Volume);
        assert!("gallon".parse::<Unit>().is_err());
    }
}
