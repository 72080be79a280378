//! Working copy of a note while it is being edited.
//!
//! # Invariants
//! - Mutations stay local until the session saves.
//! - `reference` is never absent here; a missing stored value becomes `""`.
//! - Loaded tags are copied as stored; only newly added tags are trimmed.
//! - The pending tag input is cleared only when its tag was appended.

use crate::model::note::{Note, NoteUpdate};
use crate::model::tag_set::TagSet;

/// Key name that commits the pending tag input.
pub const TAG_COMMIT_KEY: &str = "Enter";

/// Editable form fields seeded from a loaded note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    title: String,
    notes: String,
    summary: String,
    reference: String,
    tags: TagSet,
    tag_input: String,
}

impl NoteForm {
    pub fn from_note(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            notes: note.notes.clone(),
            summary: note.summary.clone(),
            reference: note.reference.clone().unwrap_or_default(),
            tags: TagSet::from_stored(&note.tags),
            tag_input: String::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn tag_input(&self) -> &str {
        &self.tag_input
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    pub fn set_notes(&mut self, value: impl Into<String>) {
        self.notes = value.into();
    }

    pub fn set_summary(&mut self, value: impl Into<String>) {
        self.summary = value.into();
    }

    pub fn set_reference(&mut self, value: impl Into<String>) {
        self.reference = value.into();
    }

    pub fn set_tag_input(&mut self, value: impl Into<String>) {
        self.tag_input = value.into();
    }

    /// Adds the pending tag input to the tag set.
    ///
    /// Blank or duplicate input is ignored silently and left in place.
    pub fn add_pending_tag(&mut self) -> bool {
        if !self.tags.add(&self.tag_input) {
            return false;
        }
        self.tag_input.clear();
        true
    }

    /// Adds `candidate` directly, bypassing the pending input.
    pub fn add_tag(&mut self, candidate: &str) -> bool {
        self.tags.add(candidate)
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.tags.remove(tag)
    }

    /// Handles a key press in the tag input.
    ///
    /// Enter without Shift commits the pending tag; other keys are ignored.
    pub fn handle_tag_key(&mut self, key: &str, shift: bool) -> bool {
        if key != TAG_COMMIT_KEY || shift {
            return false;
        }
        self.add_pending_tag()
    }

    /// Whether the title passes save-time validation.
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Builds the full update payload. The title is forwarded untrimmed.
    pub fn to_update(&self) -> NoteUpdate {
        NoteUpdate {
            title: self.title.clone(),
            notes: self.notes.clone(),
            summary: self.summary.clone(),
            reference: self.reference.clone(),
            tags: self.tags.to_vec(),
        }
    }

    /// Whether any saved field differs from `note`.
    ///
    /// The pending tag input is not part of the note and is ignored.
    pub fn differs_from(&self, note: &Note) -> bool {
        self.title != note.title
            || self.notes != note.notes
            || self.summary != note.summary
            || self.reference != note.reference.as_deref().unwrap_or_default()
            || self.tags.as_slice() != note.tags.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::NoteForm;
    use crate::model::note::{Note, NoteId};

    fn note() -> Note {
        Note {
            id: NoteId::new("7"),
            title: "A".into(),
            notes: String::new(),
            summary: String::new(),
            reference: None,
            tags: vec!["x".into()],
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn from_note_defaults_missing_reference_to_empty() {
        let form = NoteForm::from_note(&note());
        assert_eq!(form.reference(), "");
        assert_eq!(form.tags().as_slice(), &["x".to_string()]);
        assert!(!form.differs_from(&note()));
    }

    #[test]
    fn untrimmed_stored_tags_do_not_make_form_dirty() {
        let mut stored = note();
        stored.tags = vec![" x ".into(), "y".into()];
        let form = NoteForm::from_note(&stored);
        assert_eq!(form.tags().as_slice(), stored.tags.as_slice());
        assert!(!form.differs_from(&stored));
        assert_eq!(form.to_update().tags, stored.tags);
    }

    #[test]
    fn add_pending_tag_clears_input_only_on_success() {
        let mut form = NoteForm::from_note(&note());
        form.set_tag_input("  y ");
        assert!(form.add_pending_tag());
        assert_eq!(form.tag_input(), "");

        form.set_tag_input("x");
        assert!(!form.add_pending_tag());
        assert_eq!(form.tag_input(), "x");
        assert_eq!(form.tags().len(), 2);
    }

    #[test]
    fn enter_commits_but_shift_enter_does_not() {
        let mut form = NoteForm::default();
        form.set_tag_input("rust");
        assert!(!form.handle_tag_key("Enter", true));
        assert!(!form.handle_tag_key("a", false));
        assert!(form.tags().is_empty());
        assert!(form.handle_tag_key("Enter", false));
        assert!(form.tags().contains("rust"));
    }

    #[test]
    fn to_update_carries_full_field_set() {
        let mut form = NoteForm::from_note(&note());
        form.set_title("  Hi ");
        form.set_notes("# H");
        form.set_summary("s");
        form.set_reference("book");
        form.remove_tag("x");
        form.add_tag("z");

        let update = form.to_update();
        assert_eq!(update.title, "  Hi ");
        assert_eq!(update.notes, "# H");
        assert_eq!(update.summary, "s");
        assert_eq!(update.reference, "book");
        assert_eq!(update.tags, vec!["z".to_string()]);
        assert!(form.differs_from(&note()));
    }

    #[test]
    fn whitespace_title_fails_title_check() {
        let mut form = NoteForm::default();
        form.set_title(" \t ");
        assert!(!form.has_title());
    }
}
