//! Note domain model.
//!
//! # Responsibility
//! - Define the persisted note record and the full-field update payload.
//! - Keep note identity opaque to editor code.
//!
//! # Invariants
//! - `id` is supplied by the store and never changes for a note.
//! - `tags` hold unique values in insertion order.
//! - `created_at`/`updated_at` are owned by the store, never by the editor.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque note identifier as handed out by the storage collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    /// Wraps an externally supplied identifier.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates a fresh identifier for newly created notes.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NoteId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NoteId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Persisted note as returned by a `NoteStore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    /// Markdown body. Headings mark sections for downstream consumers.
    pub notes: String,
    pub summary: String,
    /// Older records may not carry a reference at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Unix epoch milliseconds.
    #[serde(default)]
    pub created_at: i64,
    /// Unix epoch milliseconds.
    #[serde(default)]
    pub updated_at: i64,
}

/// Full field set forwarded to `NoteStore::update_note`.
///
/// Update uses replacement semantics: every field overwrites the stored one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteUpdate {
    pub title: String,
    pub notes: String,
    pub summary: String,
    pub reference: String,
    pub tags: Vec<String>,
}

/// Input for creating a note through a store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub notes: String,
    pub summary: String,
    pub reference: Option<String>,
    pub tags: Vec<String>,
}

impl NewNote {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Note, NoteId};

    #[test]
    fn note_id_displays_raw_value() {
        assert_eq!(NoteId::new("42").to_string(), "42");
        assert_eq!(NoteId::from("7").as_str(), "7");
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(NoteId::generate(), NoteId::generate());
    }

    #[test]
    fn missing_reference_deserializes_as_none() {
        let note: Note = serde_json::from_str(
            r#"{"id":"7","title":"A","notes":"","summary":"","tags":["x"]}"#,
        )
        .expect("note json should parse");
        assert_eq!(note.id, NoteId::new("7"));
        assert_eq!(note.reference, None);
        assert_eq!(note.tags, vec!["x".to_string()]);
    }
}
