//! List editor module.
//!
//! The state machine behind the create/edit list screen: an ordered draft
//! of rows, the intents the screen sends, and the directives sent back.

mod directive;
mod draft;
mod errors;
mod intent;
mod machine;
mod phase;
mod picker;
mod row;
mod validation;

pub use directive::Directive;
pub use draft::{DraftSnapshot, DraftSnapshotItem, ListDraft};
pub use errors::EditorError;
pub use intent::Intent;
pub use machine::ListEditor;
pub use phase::{EditorMode, EditorPhase};
pub use picker::QuantityPicker;
pub use row::{
    ListDraftRow, NameError, RowKind, BUTTON_ROW_HEIGHT, ITEM_ROW_HEIGHT,
    ITEM_ROW_HEIGHT_WITH_ERROR, TITLE_ROW_HEIGHT, TITLE_ROW_HEIGHT_WITH_ERROR,
};
pub use validation::NameValidator;
