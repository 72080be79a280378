//! `NoteStore` contract and store error type.

use crate::model::note::{Note, NoteId, NoteUpdate};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reported by a storage collaborator.
///
/// `Display` yields the human-readable description shown to users.
#[derive(Debug)]
pub enum StoreError {
    /// A statement against the notes tables failed.
    Query(rusqlite::Error),
    NotFound(NoteId),
    InvalidData(String),
    /// Store-specific refusal carrying its own description.
    Rejected(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Query(err) => write!(f, "note query failed: {err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
            Self::Rejected(message) => f.write_str(message),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Query(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Query(value)
    }
}

/// Lookup and update operations the editor session depends on.
pub trait NoteStore {
    /// Returns the note, or `None` when no note has this id.
    fn get_note(&self, id: &NoteId) -> StoreResult<Option<Note>>;
    /// Overwrites title, notes, summary, reference and tags.
    ///
    /// Returns the persisted note after the write.
    fn update_note(&mut self, id: &NoteId, update: &NoteUpdate) -> StoreResult<Note>;
}

impl<S: NoteStore + ?Sized> NoteStore for &mut S {
    fn get_note(&self, id: &NoteId) -> StoreResult<Option<Note>> {
        (**self).get_note(id)
    }

    fn update_note(&mut self, id: &NoteId, update: &NoteUpdate) -> StoreResult<Note> {
        (**self).update_note(id, update)
    }
}
