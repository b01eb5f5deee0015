//! ListStatus enum for tracking the lifecycle of shopping lists.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of a shopping list.
///
/// A list is `Active` while being shopped and `Archived` once the user
/// completes it. Archived lists can be restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ListStatus {
    #[default]
    Active,
    Archived,
}

impl ListStatus {
    /// Returns true if the list can be modified.
    pub fn is_mutable(&self) -> bool {
        matches!(self, ListStatus::Active)
    }
}

impl StateMachine for ListStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ListStatus::*;
        matches!((self, target), (Active, Archived) | (Archived, Active))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        match self {
            ListStatus::Active => vec![ListStatus::Archived],
            ListStatus::Archived => vec![ListStatus::Active],
        }
    }
}

impl fmt::Display for ListStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ListStatus::Active => "Active",
            ListStatus::Archived => "Archived",
        };
        write!(f, "{}", s)
    }
}
