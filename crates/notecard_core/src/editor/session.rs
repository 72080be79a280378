//! Single-note editing session.
//!
//! # Responsibility
//! - Load one note by id and seed the working copy.
//! - Validate and forward saves to the store, then redirect.
//! - Report outcomes through the notifier.
//!
//! # Invariants
//! - State flows `Loading -> Ready | NotFound` and
//!   `Ready -> Saving -> Ready | Navigated`.
//! - `NotFound` and `Navigated` are terminal.
//! - The store is never called when validation fails.
//! - The busy flag is cleared on every save outcome.

use crate::editor::collaborators::{Navigator, Notice, Notifier, Route};
use crate::editor::error::{EditorError, ValidationError};
use crate::editor::form::NoteForm;
use crate::model::note::{Note, NoteId};
use crate::store::note_store::NoteStore;
use log::{error, info, warn};
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Lifecycle position of an editing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Loading,
    Ready,
    Saving,
    NotFound,
    Navigated,
}

impl EditorState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Saving => "saving",
            Self::NotFound => "not_found",
            Self::Navigated => "navigated",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::NotFound | Self::Navigated)
    }
}

impl Display for EditorState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Editing session for one note id.
///
/// Owns its working copy exclusively; dropping the session discards it.
pub struct EditorSession<S, N, T> {
    id: NoteId,
    store: S,
    navigator: N,
    notifier: T,
    state: EditorState,
    loaded: Option<Note>,
    form: NoteForm,
}

impl<S, N, T> EditorSession<S, N, T>
where
    S: NoteStore,
    N: Navigator,
    T: Notifier,
{
    /// Creates a session in `Loading` state. Call `load` next.
    pub fn new(id: impl Into<NoteId>, store: S, navigator: N, notifier: T) -> Self {
        Self {
            id: id.into(),
            store,
            navigator,
            notifier,
            state: EditorState::Loading,
            loaded: None,
            form: NoteForm::default(),
        }
    }

    /// Fetches the note and seeds the working copy.
    ///
    /// # Errors
    /// - `NotFound` when the store has no such note; redirects home.
    /// - `Persistence` when the lookup itself fails; also redirects home.
    /// - `InvalidState` when called outside `Loading`.
    pub fn load(&mut self) -> Result<&NoteForm, EditorError> {
        if self.state != EditorState::Loading {
            return Err(self.invalid_state("load"));
        }

        match self.store.get_note(&self.id) {
            Ok(Some(note)) => {
                info!(
                    "event=note_load module=editor status=ok note_id={} tag_count={}",
                    self.id,
                    note.tags.len()
                );
                self.form = NoteForm::from_note(&note);
                self.loaded = Some(note);
                self.state = EditorState::Ready;
                Ok(&self.form)
            }
            Ok(None) => {
                warn!(
                    "event=note_load module=editor status=not_found note_id={}",
                    self.id
                );
                self.redirect_missing();
                Err(EditorError::NotFound(self.id.clone()))
            }
            Err(err) => {
                error!(
                    "event=note_load module=editor status=error note_id={} error={}",
                    self.id, err
                );
                self.redirect_missing();
                Err(EditorError::Persistence(err))
            }
        }
    }

    /// Validates the working copy and forwards it to the store.
    ///
    /// On success the session is `Navigated` and the persisted note is
    /// returned. On store failure the session stays `Ready` for a retry.
    pub fn save(&mut self) -> Result<Note, EditorError> {
        match self.state {
            EditorState::Ready => {}
            EditorState::Saving => return Err(EditorError::Busy),
            EditorState::Loading | EditorState::NotFound => {
                return Err(self.reject(ValidationError::NoteNotLoaded));
            }
            EditorState::Navigated => return Err(self.invalid_state("save")),
        }
        if !self.form.has_title() {
            return Err(self.reject(ValidationError::EmptyTitle));
        }

        let started_at = Instant::now();
        let update = self.form.to_update();
        self.state = EditorState::Saving;
        let result = self.store.update_note(&self.id, &update);
        self.state = EditorState::Ready;

        match result {
            Ok(note) => {
                info!(
                    "event=note_save module=editor status=ok note_id={} tag_count={} duration_ms={}",
                    self.id,
                    update.tags.len(),
                    started_at.elapsed().as_millis()
                );
                self.notifier.show(Notice::info(
                    "Note updated",
                    "Your note has been updated successfully",
                ));
                self.loaded = Some(note.clone());
                self.navigator.go_to(Route::NoteDetail(self.id.clone()));
                self.state = EditorState::Navigated;
                Ok(note)
            }
            Err(err) => {
                error!(
                    "event=note_save module=editor status=error note_id={} duration_ms={} error={}",
                    self.id,
                    started_at.elapsed().as_millis(),
                    err
                );
                self.notifier.show(Notice::destructive(
                    "Error",
                    format!("Failed to update note: {err}"),
                ));
                Err(EditorError::Persistence(err))
            }
        }
    }

    /// Mutable access to the working copy while the session is `Ready`.
    pub fn form_mut(&mut self) -> Result<&mut NoteForm, EditorError> {
        if self.state != EditorState::Ready {
            return Err(self.invalid_state("edit"));
        }
        Ok(&mut self.form)
    }

    pub fn form(&self) -> &NoteForm {
        &self.form
    }

    pub fn id(&self) -> &NoteId {
        &self.id
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == EditorState::Loading
    }

    /// Busy flag: true only while a save is in flight.
    pub fn is_saving(&self) -> bool {
        self.state == EditorState::Saving
    }

    /// Mirrors the save button rule: not busy and a non-blank title.
    pub fn can_submit(&self) -> bool {
        self.state == EditorState::Ready && self.form.has_title()
    }

    /// Last note seen from the store (loaded or saved).
    pub fn note(&self) -> Option<&Note> {
        self.loaded.as_ref()
    }

    /// Whether the working copy has unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.loaded
            .as_ref()
            .is_some_and(|note| self.form.differs_from(note))
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn notifier(&self) -> &T {
        &self.notifier
    }

    /// Tears the session down, handing back its collaborators.
    pub fn into_parts(self) -> (S, N, T) {
        (self.store, self.navigator, self.notifier)
    }

    fn redirect_missing(&mut self) {
        self.notifier.show(Notice::destructive(
            "Note not found",
            "The note you're trying to edit doesn't exist",
        ));
        self.navigator.go_to(Route::Home);
        self.state = EditorState::NotFound;
    }

    fn reject(&mut self, reason: ValidationError) -> EditorError {
        warn!(
            "event=note_save module=editor status=rejected note_id={} reason={:?}",
            self.id, reason
        );
        self.notifier.show(Notice::destructive(
            "Title required",
            "Please enter a title for your note",
        ));
        EditorError::Validation(reason)
    }

    fn invalid_state(&self, operation: &'static str) -> EditorError {
        EditorError::InvalidState {
            operation,
            state: self.state,
        }
    }
}
