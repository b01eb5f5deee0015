//! Editor lifecycle and mode.

use std::fmt;

use crate::domain::foundation::{ListId, StateMachine};

/// Whether the editor creates a new list or edits a stored one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(ListId),
}

impl EditorMode {
    pub fn is_create(&self) -> bool {
        matches!(self, EditorMode::Create)
    }
}

/// Lifecycle of one editor instance.
///
/// ```text
/// Unloaded ──load──▶ Ready ──save──▶ Saving ──ok──▶ Saved
///    │                 ▲               │              │
///    │                 └────failed─────┘              │
///    └──────────────▶ Closed ◀────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorPhase {
    #[default]
    Unloaded,
    Ready,
    Saving,
    Saved,
    Closed,
}

impl EditorPhase {
    /// True while edit intents are applied to the draft.
    pub fn accepts_edits(&self) -> bool {
        matches!(self, EditorPhase::Ready)
    }
}

impl StateMachine for EditorPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use EditorPhase::*;
        matches!(
            (self, target),
            (Unloaded, Ready)
                | (Unloaded, Closed)
                | (Ready, Saving)
                | (Ready, Closed)
                | (Saving, Ready)
                | (Saving, Saved)
                | (Saved, Closed)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use EditorPhase::*;
        match self {
            Unloaded => vec![Ready, Closed],
            Ready => vec![Saving, Closed],
            Saving => vec![Ready, Saved],
            Saved => vec![Closed],
            Closed => vec![],
        }
    }
}

impl fmt::Display for EditorPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EditorPhase::Unloaded => "unloaded",
            EditorPhase::Ready => "ready",
            EditorPhase::Saving => "saving",
            EditorPhase::Saved => "saved",
            EditorPhase::Closed => "closed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_is_terminal() {
        assert!(EditorPhase::Closed.is_terminal());
    }

    #[test]
    fn saving_cannot_start_twice() {
        assert!(EditorPhase::Saving.transition_to(EditorPhase::Saving).is_err());
    }

    #[test]
    fn failed_save_returns_to_ready() {
        assert_eq!(
            EditorPhase::Saving.transition_to(EditorPhase::Ready),
            Ok(EditorPhase::Ready)
        );
    }

    #[test]
    fn cannot_reload_once_ready() {
        assert!(!EditorPhase::Ready.can_transition_to(&EditorPhase::Unloaded));
    }

    #[test]
    fn only_ready_accepts_edits() {
        assert!(EditorPhase::Ready.accepts_edits());
        assert!(!EditorPhase::Saving.accepts_edits());
        assert!(!EditorPhase::Saved.accepts_edits());
    }
}
