//! In-process note store.
//!
//! Holds notes in a map keyed by id. Useful for embedding the editor without
//! SQLite and as a fixture in tests.

use crate::model::note::{NewNote, Note, NoteId, NoteUpdate};
use crate::model::tag_set::TagSet;
use crate::store::note_store::{NoteStore, StoreError, StoreResult};
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

/// Map-backed `NoteStore`.
#[derive(Debug, Default)]
pub struct InMemoryNoteStore {
    notes: HashMap<NoteId, Note>,
}

impl InMemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `note` as-is, replacing any note with the same id.
    pub fn insert(&mut self, note: Note) {
        self.notes.insert(note.id.clone(), note);
    }

    /// Creates a note with a generated id and store-owned timestamps.
    pub fn create_note(&mut self, new_note: &NewNote) -> Note {
        let now = now_epoch_ms();
        let note = Note {
            id: NoteId::generate(),
            title: new_note.title.clone(),
            notes: new_note.notes.clone(),
            summary: new_note.summary.clone(),
            reference: new_note.reference.clone(),
            tags: new_note.tags.iter().collect::<TagSet>().to_vec(),
            created_at: now,
            updated_at: now,
        };
        self.insert(note.clone());
        note
    }

    /// Lists notes sorted by `updated_at DESC, id ASC`.
    pub fn list_notes(&self) -> Vec<Note> {
        let mut notes: Vec<Note> = self.notes.values().cloned().collect();
        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then_with(|| a.id.cmp(&b.id)));
        notes
    }

    pub fn delete_note(&mut self, id: &NoteId) -> StoreResult<()> {
        self.notes
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

impl NoteStore for InMemoryNoteStore {
    fn get_note(&self, id: &NoteId) -> StoreResult<Option<Note>> {
        Ok(self.notes.get(id).cloned())
    }

    fn update_note(&mut self, id: &NoteId, update: &NoteUpdate) -> StoreResult<Note> {
        let note = self
            .notes
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        note.title = update.title.clone();
        note.notes = update.notes.clone();
        note.summary = update.summary.clone();
        note.reference = Some(update.reference.clone());
        note.tags = update.tags.iter().collect::<TagSet>().to_vec();
        note.updated_at = now_epoch_ms().max(note.updated_at);
        Ok(note.clone())
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::InMemoryNoteStore;
    use crate::model::note::{NewNote, NoteId, NoteUpdate};
    use crate::store::note_store::{NoteStore, StoreError};

    #[test]
    fn create_then_get_returns_same_note() {
        let mut store = InMemoryNoteStore::new();
        let created = store.create_note(&NewNote {
            tags: vec!["a".into(), "a".into(), " b ".into()],
            ..NewNote::titled("First")
        });
        let loaded = store.get_note(&created.id).unwrap().unwrap();
        assert_eq!(loaded, created);
        assert_eq!(loaded.tags, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn update_replaces_all_fields() {
        let mut store = InMemoryNoteStore::new();
        let created = store.create_note(&NewNote::titled("Old"));
        let updated = store
            .update_note(
                &created.id,
                &NoteUpdate {
                    title: "New".into(),
                    notes: "# H\nbody".into(),
                    summary: "sum".into(),
                    reference: "p. 12".into(),
                    tags: vec!["z".into(), "y".into()],
                },
            )
            .unwrap();
        assert_eq!(updated.title, "New");
        assert_eq!(updated.reference.as_deref(), Some("p. 12"));
        assert_eq!(updated.tags, vec!["z".to_string(), "y".to_string()]);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn update_missing_note_returns_not_found() {
        let mut store = InMemoryNoteStore::new();
        let err = store
            .update_note(&NoteId::new("missing"), &NoteUpdate::default())
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id.as_str() == "missing"));
    }

    #[test]
    fn delete_removes_note() {
        let mut store = InMemoryNoteStore::new();
        let created = store.create_note(&NewNote::titled("gone"));
        store.delete_note(&created.id).unwrap();
        assert!(store.is_empty());
        assert!(store.delete_note(&created.id).is_err());
    }
}
