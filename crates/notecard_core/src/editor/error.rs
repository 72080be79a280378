//! Editor session error taxonomy.
//!
//! Every variant is recoverable at the UI boundary: `NotFound` redirects,
//! the rest leave the form editable.

use crate::editor::session::EditorState;
use crate::model::note::NoteId;
use crate::store::note_store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Save-time precondition failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Title is empty after trimming.
    EmptyTitle,
    /// Save requested before a note was loaded.
    NoteNotLoaded,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => f.write_str("title is required"),
            Self::NoteNotLoaded => f.write_str("no note is loaded"),
        }
    }
}

impl Error for ValidationError {}

/// Failure of a load or save step in an editor session.
///
/// `NotFound`, `Validation` and `Persistence` are returned after the
/// matching notice was shown; `Busy` and `InvalidState` show nothing.
#[derive(Debug)]
pub enum EditorError {
    /// Load found no note with this id.
    NotFound(NoteId),
    /// A save precondition failed; the store was not called.
    Validation(ValidationError),
    /// The store failed to read or write the note.
    Persistence(StoreError),
    /// A save is already in flight.
    Busy,
    /// Operation not allowed in the current session state.
    InvalidState {
        operation: &'static str,
        state: EditorState,
    },
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::Validation(err) => write!(f, "validation failed: {err}"),
            Self::Persistence(err) => write!(f, "persistence failed: {err}"),
            Self::Busy => f.write_str("a save is already in progress"),
            Self::InvalidState { operation, state } => {
                write!(f, "cannot {operation} while session is {state}")
            }
        }
    }
}

impl Error for EditorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Persistence(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for EditorError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for EditorError {
    fn from(value: StoreError) -> Self {
        Self::Persistence(value)
    }
}
