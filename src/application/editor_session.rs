//! Editor session - runs a [`ListEditor`] on its own task.
//!
//! The screen sends intents through an [`EditorHandle`] and reads back one
//! [`EditorEvent`] per intent, in order. Acknowledgements travel through the
//! same queue as user intents, so the editor never sees two intents at once.
//! The draft as of the latest event is published for the screen to render
//! from. The task ends after `LeaveScreen` closes the editor or when the
//! handle is dropped.
//!
//! Events queue up until the screen reads them. A caller that pipelines
//! with [`EditorHandle::send`] must drain [`EditorHandle::next_event`]
//! before more than [`INTENT_QUEUE_CAPACITY`] events are outstanding, or
//! `send` stalls once both queues are full. [`EditorHandle::request`]
//! sends and reads in one step and never stalls.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::domain::editor::{
    Directive, EditorError, EditorPhase, Intent, ListDraft, ListEditor,
};

/// Bound of both the intent and the event queue.
pub const INTENT_QUEUE_CAPACITY: usize = 32;

/// Outcome of one intent.
#[derive(Debug, Clone)]
pub enum EditorEvent {
    /// Directives to apply, possibly none.
    Directives(Vec<Directive>),
    /// The intent failed; the draft is unchanged.
    Failed(EditorError),
}

/// Screen-side end of an editor session.
///
/// ```ignore
/// let mut handle = EditorHandle::spawn(ListEditor::create(store, cache));
/// let directives = handle.request(Intent::LoadDraft).await?;
/// ```
pub struct EditorHandle {
    intents: mpsc::Sender<Intent>,
    events: mpsc::Receiver<EditorEvent>,
    draft: watch::Receiver<ListDraft>,
    task: JoinHandle<ListEditor>,
}

impl EditorHandle {
    /// Spawn `editor` on the current tokio runtime.
    pub fn spawn(editor: ListEditor) -> Self {
        let (intent_tx, intent_rx) = mpsc::channel(INTENT_QUEUE_CAPACITY);
        let (event_tx, event_rx) = mpsc::channel(INTENT_QUEUE_CAPACITY);
        let (draft_tx, draft_rx) = watch::channel(editor.draft().clone());
        let task = tokio::spawn(run(editor, intent_rx, event_tx, draft_tx));
        Self {
            intents: intent_tx,
            events: event_rx,
            draft: draft_rx,
            task,
        }
    }

    /// The draft as of the most recently sent event.
    pub fn draft(&self) -> ListDraft {
        self.draft.borrow().clone()
    }

    /// Queue an intent. Its event must later be read with
    /// [`next_event`](Self::next_event); with more than
    /// [`INTENT_QUEUE_CAPACITY`] events unread this waits.
    ///
    /// # Errors
    ///
    /// - `Closed` if the session has ended
    pub async fn send(&self, intent: Intent) -> Result<(), EditorError> {
        self.intents
            .send(intent)
            .await
            .map_err(|_| EditorError::Closed)
    }

    /// Next event, or `None` once the session has ended and every event
    /// was read.
    pub async fn next_event(&mut self) -> Option<EditorEvent> {
        self.events.recv().await
    }

    /// Send an intent and wait for its outcome.
    pub async fn request(&mut self, intent: Intent) -> Result<Vec<Directive>, EditorError> {
        self.send(intent).await?;
        match self.next_event().await {
            Some(EditorEvent::Directives(directives)) => Ok(directives),
            Some(EditorEvent::Failed(e)) => Err(e),
            None => Err(EditorError::Closed),
        }
    }

    /// End the session and take the editor back.
    ///
    /// Returns `None` if the session task panicked.
    pub async fn finish(self) -> Option<ListEditor> {
        drop(self.intents);
        drop(self.events);
        self.task.await.ok()
    }
}

async fn run(
    mut editor: ListEditor,
    mut intents: mpsc::Receiver<Intent>,
    events: mpsc::Sender<EditorEvent>,
    draft: watch::Sender<ListDraft>,
) -> ListEditor {
    while let Some(intent) = intents.recv().await {
        let event = match editor.handle(intent).await {
            Ok(directives) => EditorEvent::Directives(directives),
            Err(e) => {
                warn!(error = %e, retryable = e.is_retryable(), "Editor intent failed");
                EditorEvent::Failed(e)
            }
        };

        if draft.borrow().rows() != editor.draft().rows() {
            draft.send_replace(editor.draft().clone());
        }
        if events.send(event).await.is_err() {
            debug!("Editor events receiver dropped");
            break;
        }
        if editor.phase() == EditorPhase::Closed {
            break;
        }
    }
    debug!(phase = %editor.phase(), "Editor session ended");
    editor
}
