//! SQLite-backed note store.
//!
//! # Responsibility
//! - Persist notes and their ordered tags in `notes` / `note_tags`.
//! - Keep SQL details inside the storage boundary.
//!
//! # Invariants
//! - `update_note` rewrites fields and tags in a single transaction.
//! - Tags are read back in insertion order (`position ASC`).
//! - Stored tags are trimmed, non-empty and unique per note.

use crate::model::note::{NewNote, Note, NoteId, NoteUpdate};
use crate::model::tag_set::TagSet;
use crate::store::note_store::{NoteStore, StoreError, StoreResult};
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension, Row, TransactionBehavior};

const NOTE_SELECT_SQL: &str = "SELECT
    id,
    title,
    notes,
    summary,
    reference,
    created_at,
    updated_at
FROM notes";

/// `NoteStore` over a migrated SQLite connection.
pub struct SqliteNoteStore<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteNoteStore<'conn> {
    /// Wraps a connection returned by `db::open_db*`.
    pub fn try_new(conn: &'conn mut Connection) -> StoreResult<Self> {
        for table in ["notes", "note_tags"] {
            if !table_exists(conn, table)? {
                return Err(StoreError::InvalidData(format!(
                    "required table `{table}` is missing; open the database with db::open_db"
                )));
            }
        }
        Ok(Self { conn })
    }

    /// Inserts a new note with a generated id.
    pub fn create_note(&mut self, new_note: &NewNote) -> StoreResult<Note> {
        let id = NoteId::generate();
        let tags = new_note.tags.iter().collect::<TagSet>();
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        tx.execute(
            "INSERT INTO notes (id, title, notes, summary, reference)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                id.as_str(),
                new_note.title.as_str(),
                new_note.notes.as_str(),
                new_note.summary.as_str(),
                new_note.reference.as_deref(),
            ],
        )?;
        write_tags(&tx, &id, &tags)?;
        tx.commit()?;

        debug!("event=note_create module=store status=ok note_id={id}");
        self.read_back(&id)
    }

    /// Lists notes sorted by `updated_at DESC, id ASC`.
    pub fn list_notes(&self) -> StoreResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} ORDER BY updated_at DESC, id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            let mut note = parse_note_row(row)?;
            note.tags = load_tags(self.conn, &note.id)?;
            notes.push(note);
        }
        Ok(notes)
    }

    /// Deletes one note; its tags cascade.
    pub fn delete_note(&mut self, id: &NoteId) -> StoreResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE id = ?1;", [id.as_str()])?;
        if changed == 0 {
            return Err(StoreError::NotFound(id.clone()));
        }
        Ok(())
    }

    fn read_back(&self, id: &NoteId) -> StoreResult<Note> {
        self.get_note(id)?.ok_or_else(|| {
            warn!("event=note_read_back module=store status=error note_id={id}");
            StoreError::InvalidData(format!("note {id} missing in read-back"))
        })
    }
}

impl NoteStore for SqliteNoteStore<'_> {
    fn get_note(&self, id: &NoteId) -> StoreResult<Option<Note>> {
        let note = self
            .conn
            .query_row(
                &format!("{NOTE_SELECT_SQL} WHERE id = ?1;"),
                [id.as_str()],
                |row| Ok(parse_note_row(row)),
            )
            .optional()?
            .transpose()?;

        match note {
            Some(mut note) => {
                note.tags = load_tags(self.conn, &note.id)?;
                Ok(Some(note))
            }
            None => Ok(None),
        }
    }

    fn update_note(&mut self, id: &NoteId, update: &NoteUpdate) -> StoreResult<Note> {
        let tags = update.tags.iter().collect::<TagSet>();
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let changed = tx.execute(
            "UPDATE notes
             SET
                title = ?2,
                notes = ?3,
                summary = ?4,
                reference = ?5,
                updated_at = MAX(updated_at, CAST(strftime('%s', 'now') AS INTEGER) * 1000)
             WHERE id = ?1;",
            params![
                id.as_str(),
                update.title.as_str(),
                update.notes.as_str(),
                update.summary.as_str(),
                update.reference.as_str(),
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::NotFound(id.clone()));
        }

        tx.execute("DELETE FROM note_tags WHERE note_id = ?1;", [id.as_str()])?;
        write_tags(&tx, id, &tags)?;
        tx.commit()?;

        debug!(
            "event=note_update module=store status=ok note_id={id} tag_count={}",
            tags.len()
        );
        self.read_back(id)
    }
}

fn write_tags(conn: &Connection, id: &NoteId, tags: &TagSet) -> StoreResult<()> {
    let mut stmt =
        conn.prepare("INSERT INTO note_tags (note_id, position, tag) VALUES (?1, ?2, ?3);")?;
    for (position, tag) in tags.iter().enumerate() {
        let position = i64::try_from(position)
            .map_err(|_| StoreError::InvalidData("tag position overflow".to_string()))?;
        stmt.execute(params![id.as_str(), position, tag])?;
    }
    Ok(())
}

fn load_tags(conn: &Connection, id: &NoteId) -> StoreResult<Vec<String>> {
    let mut stmt =
        conn.prepare("SELECT tag FROM note_tags WHERE note_id = ?1 ORDER BY position ASC;")?;
    let mut rows = stmt.query([id.as_str()])?;
    let mut tags = Vec::new();
    while let Some(row) = rows.next()? {
        tags.push(row.get(0)?);
    }
    Ok(tags)
}

fn parse_note_row(row: &Row<'_>) -> StoreResult<Note> {
    let id: String = row.get("id")?;
    if id.trim().is_empty() {
        return Err(StoreError::InvalidData(
            "empty id value in notes.id".to_string(),
        ));
    }
    Ok(Note {
        id: NoteId::new(id),
        title: row.get("title")?,
        notes: row.get("notes")?,
        summary: row.get("summary")?,
        reference: row.get("reference")?,
        tags: Vec::new(),
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn table_exists(conn: &Connection, table: &str) -> StoreResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
