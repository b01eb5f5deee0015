//! List editor state machine.
//!
//! Owns the draft of the list being created or edited, applies intents one
//! at a time and answers each with the directives the screen must apply.
//!
//! Two advisory flags keep stale taps from racing the screen:
//!
//! - `is_user_typing` is set while a text field has focus. Opening the
//!   quantity picker, adding a row and saving are ignored until the typed
//!   text arrives.
//! - `is_ui_busy` is set by every row directive until the screen
//!   acknowledges it. Adding a row is ignored meanwhile.
//!
//! When validation changes row errors, the save button is refreshed on
//! acknowledgement rather than alongside the row update, so the cached
//! `is_valid` flag only moves once the screen has caught up.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::{
    Directive, EditorError, EditorMode, EditorPhase, Intent, ListDraft, ListDraftRow,
    NameValidator, RowKind,
};
use crate::domain::foundation::{ListId, RowId, StateMachine};
use crate::domain::list::{Quantity, Unit};
use crate::ports::{DraftCache, ListStore};

pub struct ListEditor {
    store: Arc<dyn ListStore>,
    cache: Arc<dyn DraftCache>,
    mode: EditorMode,
    /// Id the list is saved under; pre-allocated in create mode so a
    /// retried save overwrites instead of duplicating.
    list_id: ListId,
    phase: EditorPhase,
    draft: ListDraft,
    validator: NameValidator,
    is_user_typing: bool,
    is_ui_busy: bool,
    is_valid: bool,
    auto_save_on_exit: bool,
}

impl ListEditor {
    /// Editor for a new list.
    pub fn create(store: Arc<dyn ListStore>, cache: Arc<dyn DraftCache>) -> Self {
        Self::new(store, cache, EditorMode::Create)
    }

    /// Editor for the stored list `id`.
    pub fn edit(store: Arc<dyn ListStore>, cache: Arc<dyn DraftCache>, id: ListId) -> Self {
        Self::new(store, cache, EditorMode::Edit(id))
    }

    pub fn new(store: Arc<dyn ListStore>, cache: Arc<dyn DraftCache>, mode: EditorMode) -> Self {
        let list_id = match mode {
            EditorMode::Create => ListId::new(),
            EditorMode::Edit(id) => id,
        };
        Self {
            store,
            cache,
            mode,
            list_id,
            phase: EditorPhase::Unloaded,
            draft: ListDraft::empty(),
            validator: NameValidator::default(),
            is_user_typing: false,
            is_ui_busy: false,
            is_valid: false,
            auto_save_on_exit: true,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Id the list is (or will be) stored under.
    pub fn list_id(&self) -> ListId {
        self.list_id
    }

    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    pub fn draft(&self) -> &ListDraft {
        &self.draft
    }

    /// Cached completion readiness, as last shown on the save button.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn is_user_typing(&self) -> bool {
        self.is_user_typing
    }

    pub fn is_ui_busy(&self) -> bool {
        self.is_ui_busy
    }

    pub fn auto_save_on_exit(&self) -> bool {
        self.auto_save_on_exit
    }

    /// Row kind and height for the screen's layout pass.
    pub fn row_layout(&self, index: usize) -> Option<(RowKind, u16)> {
        self.draft
            .row_height(index)
            .map(|height| (self.draft.kind_at(index), height))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Intent dispatch
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply one intent and return the directives it produced.
    ///
    /// # Errors
    ///
    /// - `NotLoaded` for any intent but `LoadDraft` before the draft loads
    /// - `Closed` after `LeaveScreen`
    /// - `UnknownRow` / `ProtectedRow` for intents naming the wrong row
    /// - `ListNotFound` when editing a list that no longer exists
    /// - `Persistence` / `DraftCache` when a port fails; the draft is kept
    pub async fn handle(&mut self, intent: Intent) -> Result<Vec<Directive>, EditorError> {
        debug!(
            intent = intent.name(),
            phase = %self.phase,
            typing = self.is_user_typing,
            busy = self.is_ui_busy,
            "Handling editor intent"
        );

        match (self.phase, &intent) {
            (EditorPhase::Closed, _) => return Err(EditorError::Closed),
            (EditorPhase::Unloaded, Intent::LoadDraft | Intent::LeaveScreen) => {}
            (EditorPhase::Unloaded, _) => return Err(EditorError::NotLoaded),
            (_, Intent::LeaveScreen | Intent::UiUpdateAcknowledged) => {}
            (phase, _) if !phase.accepts_edits() => {
                warn!(intent = intent.name(), %phase, "Ignoring intent while not editable");
                return Ok(Vec::new());
            }
            _ => {}
        }

        let mut out = Vec::new();
        match intent {
            Intent::LoadDraft => self.load_draft(&mut out).await?,
            Intent::ValidateAll { changed_row } => self.validate_all(changed_row, &mut out)?,
            Intent::BeginEditingTitleOrItem(row_id) => self.begin_editing_text(row_id)?,
            Intent::BeginEditingQuantity(row_id) => self.begin_editing_quantity(row_id, &mut out)?,
            Intent::TitleOrItemChanged { row_id, text } => {
                self.text_changed(row_id, text, &mut out)?;
            }
            Intent::QuantityOrUnitChanged {
                row_id,
                quantity,
                unit,
            } => self.quantity_or_unit_changed(row_id, quantity, unit, &mut out)?,
            Intent::AddItemRow => self.add_item_row(&mut out),
            Intent::DeleteRow(row_id) => self.delete_row(row_id, &mut out)?,
            Intent::UiUpdateAcknowledged => self.ui_update_acknowledged(&mut out),
            Intent::Save => self.save(&mut out).await?,
            Intent::LeaveScreen => self.leave_screen().await?,
        }
        Ok(out)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    async fn load_draft(&mut self, out: &mut Vec<Directive>) -> Result<(), EditorError> {
        if self.phase != EditorPhase::Unloaded {
            warn!(phase = %self.phase, "Draft already loaded");
            return Ok(());
        }

        match self.mode {
            EditorMode::Edit(id) => {
                let contents = self
                    .store
                    .load_list(&id)
                    .await?
                    .ok_or(EditorError::ListNotFound(id))?;
                self.draft = ListDraft::from_parts(&contents.title, &contents.items);
                self.validator = NameValidator::for_edit();
                info!(list_id = %id, items = contents.items.len(), "Loaded list for editing");
            }
            EditorMode::Create => {
                let existing = self.store.list_existing_titles().await?;
                self.validator = NameValidator::for_create(existing);
                match self.cache.load_draft().await? {
                    Some(snapshot) => {
                        self.draft = ListDraft::from_snapshot(snapshot);
                        self.cache.clear_draft().await?;
                        info!(items = self.draft.item_rows().len(), "Restored cached draft");
                    }
                    None => self.draft = ListDraft::empty(),
                }
            }
        }

        self.phase = self.phase.transition_to(EditorPhase::Ready)?;
        out.push(Directive::ReloadAll);
        self.validate_all(None, out)
    }

    /// Re-validate one row or all rows that have been typed into.
    ///
    /// Rows whose title is still `None` were never touched and keep their
    /// current error; they already fail completion readiness.
    fn validate_all(
        &mut self,
        changed_row: Option<RowId>,
        out: &mut Vec<Directive>,
    ) -> Result<(), EditorError> {
        let targets = match changed_row {
            Some(id) => {
                let (_, kind) = self.draft.locate(id)?;
                if kind == RowKind::Button {
                    return Err(EditorError::ProtectedRow(id));
                }
                vec![id]
            }
            None => self.draft.editable_ids(),
        };

        let mut affected = Vec::new();
        for id in targets {
            let (index, kind) = self.draft.locate(id)?;
            let row = &self.draft.rows()[index];
            if changed_row.is_none() && row.title.is_none() {
                continue;
            }
            let error = self.validator.check(row.title.as_deref(), kind);
            if error != row.error {
                self.draft.editable_row_mut(id)?.error = error;
                affected.push(id);
            }
        }

        if !affected.is_empty() {
            debug!(rows = affected.len(), "Row errors changed");
            self.is_ui_busy = true;
            out.push(Directive::UpdateRows {
                ids: affected,
                animated: true,
            });
        } else {
            self.refresh_validity(out);
        }
        Ok(())
    }

    fn begin_editing_text(&mut self, row_id: RowId) -> Result<(), EditorError> {
        let row = self.draft.editable_row_mut(row_id)?;
        row.start_editing = false;
        self.is_user_typing = true;
        Ok(())
    }

    fn begin_editing_quantity(
        &mut self,
        row_id: RowId,
        out: &mut Vec<Directive>,
    ) -> Result<(), EditorError> {
        let row = self.draft.item_row_mut(row_id)?;
        let (quantity, unit) = (row.effective_quantity(), row.effective_unit());
        if self.is_user_typing {
            debug!(%row_id, "Ignoring quantity picker while typing");
            return Ok(());
        }
        out.push(Directive::OpenQuantityUnitPicker {
            row_id,
            quantity,
            unit,
        });
        Ok(())
    }

    fn text_changed(
        &mut self,
        row_id: RowId,
        text: String,
        out: &mut Vec<Directive>,
    ) -> Result<(), EditorError> {
        self.draft.editable_row_mut(row_id)?.title = Some(text);
        self.is_user_typing = false;
        self.validate_all(Some(row_id), out)
    }

    fn quantity_or_unit_changed(
        &mut self,
        row_id: RowId,
        quantity: Option<Quantity>,
        unit: Option<Unit>,
        out: &mut Vec<Directive>,
    ) -> Result<(), EditorError> {
        let row = self.draft.item_row_mut(row_id)?;
        let unit = unit.unwrap_or_else(|| row.effective_unit());
        row.unit = Some(unit);
        row.quantity = quantity.or(row.quantity).map(|q| q.normalized_for(unit));
        self.is_ui_busy = true;
        out.push(Directive::UpdateRows {
            ids: vec![row_id],
            animated: false,
        });
        Ok(())
    }

    fn add_item_row(&mut self, out: &mut Vec<Directive>) {
        if self.is_user_typing || self.is_ui_busy || !self.is_valid {
            debug!(
                typing = self.is_user_typing,
                busy = self.is_ui_busy,
                valid = self.is_valid,
                "Ignoring add item"
            );
            return;
        }
        let row = ListDraftRow::new_item_row();
        let id = row.id;
        let index = self.draft.insert_item(row);
        self.is_ui_busy = true;
        self.is_valid = self.draft.is_ready();
        out.push(Directive::InsertRow { index, id });
        out.push(Directive::UpdateSaveButtonState {
            enabled: self.is_valid,
        });
    }

    fn delete_row(&mut self, row_id: RowId, out: &mut Vec<Directive>) -> Result<(), EditorError> {
        let index = self.draft.remove_item(row_id)?;
        self.is_ui_busy = true;
        out.push(Directive::RemoveRow { index, id: row_id });
        self.validate_all(None, out)
    }

    fn ui_update_acknowledged(&mut self, out: &mut Vec<Directive>) {
        self.is_ui_busy = false;
        self.refresh_validity(out);
    }

    async fn save(&mut self, out: &mut Vec<Directive>) -> Result<(), EditorError> {
        if self.is_user_typing {
            debug!("Ignoring save while typing");
            return Ok(());
        }

        self.validate_all(None, out)?;
        if !self.draft.is_ready() {
            debug!("Ignoring save of incomplete draft");
            return Ok(());
        }

        self.phase = self.phase.transition_to(EditorPhase::Saving)?;
        self.auto_save_on_exit = false;

        let title = self.draft.title_text();
        let items = self.draft.to_items();
        let result = match self.mode {
            EditorMode::Create => self.store.create_list(&self.list_id, &title, &items).await,
            EditorMode::Edit(id) => self.store.replace_list(&id, &title, &items).await,
        };

        match result {
            Ok(()) => {
                self.phase = self.phase.transition_to(EditorPhase::Saved)?;
                info!(list_id = %self.list_id, items = items.len(), "Saved list");
                out.push(Directive::NavigateBack);
                Ok(())
            }
            Err(e) => {
                warn!(list_id = %self.list_id, error = %e, "Failed to save list");
                self.phase = self.phase.transition_to(EditorPhase::Ready)?;
                self.auto_save_on_exit = true;
                Err(e.into())
            }
        }
    }

    async fn leave_screen(&mut self) -> Result<(), EditorError> {
        if self.phase == EditorPhase::Unloaded {
            self.phase = self.phase.transition_to(EditorPhase::Closed)?;
            return Ok(());
        }

        if self.auto_save_on_exit && self.mode.is_create() && self.draft.has_input() {
            self.cache.save_draft(&self.draft.to_snapshot()).await?;
            info!(items = self.draft.item_rows().len(), "Cached unsaved draft");
        } else {
            self.cache.clear_draft().await?;
        }

        self.phase = EditorPhase::Closed;
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn refresh_validity(&mut self, out: &mut Vec<Directive>) {
        let ready = self.draft.is_ready();
        if ready != self.is_valid {
            self.is_valid = ready;
            out.push(Directive::UpdateSaveButtonState { enabled: ready });
        }
    }
}

impl std::fmt::Debug for ListEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListEditor")
            .field("mode", &self.mode)
            .field("list_id", &self.list_id)
            .field("phase", &self.phase)
            .field("rows", &self.draft.len())
            .field("is_user_typing", &self.is_user_typing)
            .field("is_ui_busy", &self.is_ui_busy)
            .field("is_valid", &self.is_valid)
            .finish()
    }
}
