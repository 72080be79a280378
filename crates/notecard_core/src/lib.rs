//! Core of the note editor.
//!
//! Owns the editing rules for a single note: the ordered tag set, the
//! load/save session state machine, and the storage seam it talks to.

pub mod config;
pub mod db;
pub mod editor;
pub mod logging;
pub mod model;
pub mod store;

pub use config::CoreConfig;
pub use editor::collaborators::{
    HistoryNavigator, Navigator, Notice, NoticeLog, NoticeVariant, Notifier, Route,
};
pub use editor::error::{EditorError, ValidationError};
pub use editor::form::NoteForm;
pub use editor::session::{EditorSession, EditorState};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{NewNote, Note, NoteId, NoteUpdate};
pub use model::sections::{sections, NoteSection};
pub use model::tag_set::TagSet;
pub use store::memory::InMemoryNoteStore;
pub use store::note_store::{NoteStore, StoreError, StoreResult};
pub use store::sqlite::SqliteNoteStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
