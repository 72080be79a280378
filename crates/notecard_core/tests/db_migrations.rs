use notecard_core::db::migrations::latest_version;
use notecard_core::db::{open_db, open_db_in_memory, DbError};
use notecard_core::{NoteId, NoteStore, SqliteNoteStore};
use rusqlite::Connection;

fn user_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn columns(conn: &Connection, table: &str) -> Vec<String> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({table});"))
        .unwrap();
    let names = stmt
        .query_map([], |row| row.get::<_, String>(1))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    names
}

fn insert_note(conn: &Connection, id: &str) {
    conn.execute("INSERT INTO notes (id, title) VALUES (?1, 'title');", [id])
        .unwrap();
}

#[test]
fn fresh_database_gets_note_and_tag_columns() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(user_version(&conn), latest_version());
    assert_eq!(
        columns(&conn, "notes"),
        ["id", "title", "notes", "summary", "reference", "created_at", "updated_at"]
    );
    assert_eq!(columns(&conn, "note_tags"), ["note_id", "position", "tag"]);
}

#[test]
fn database_from_newer_build_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");
    Connection::open(&path)
        .unwrap()
        .execute_batch("PRAGMA user_version = 999;")
        .unwrap();

    match open_db(&path).unwrap_err() {
        DbError::SchemaTooNew { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn failed_tag_migration_reports_its_version_and_rolls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.db");
    Connection::open(&path)
        .unwrap()
        .execute_batch("CREATE TABLE note_tags (note_id TEXT);")
        .unwrap();

    let err = open_db(&path).unwrap_err();
    assert!(matches!(err, DbError::Migration { version: 2, .. }));
    assert_eq!(err.failed_version(), Some(2));
    assert!(err.to_string().contains("migration 2"));

    let conn = Connection::open(&path).unwrap();
    assert_eq!(user_version(&conn), 0);
    let notes_tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'notes';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(notes_tables, 0);
}

#[test]
fn same_tag_twice_on_one_note_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    insert_note(&conn, "n1");
    insert_note(&conn, "n2");
    conn.execute(
        "INSERT INTO note_tags (note_id, position, tag) VALUES ('n1', 0, 'x');",
        [],
    )
    .unwrap();

    let duplicate = conn.execute(
        "INSERT INTO note_tags (note_id, position, tag) VALUES ('n1', 1, 'x');",
        [],
    );
    assert!(duplicate.is_err());

    conn.execute(
        "INSERT INTO note_tags (note_id, position, tag) VALUES ('n2', 0, 'x');",
        [],
    )
    .unwrap();
}

#[test]
fn tag_positions_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notecard.db");
    {
        let conn = open_db(&path).unwrap();
        insert_note(&conn, "n1");
        conn.execute_batch(
            "INSERT INTO note_tags (note_id, position, tag) VALUES ('n1', 2, 'c');
             INSERT INTO note_tags (note_id, position, tag) VALUES ('n1', 0, 'b');
             INSERT INTO note_tags (note_id, position, tag) VALUES ('n1', 1, 'a');",
        )
        .unwrap();
    }

    let mut conn = open_db(&path).unwrap();
    assert_eq!(user_version(&conn), latest_version());
    let store = SqliteNoteStore::try_new(&mut conn).unwrap();
    let note = store.get_note(&NoteId::new("n1")).unwrap().unwrap();
    assert_eq!(note.tags, vec!["b", "a", "c"]);
}

#[test]
fn deleting_note_cascades_to_tags() {
    let conn = open_db_in_memory().unwrap();
    insert_note(&conn, "n1");
    conn.execute(
        "INSERT INTO note_tags (note_id, position, tag) VALUES ('n1', 0, 'x');",
        [],
    )
    .unwrap();
    conn.execute("DELETE FROM notes WHERE id = 'n1';", []).unwrap();

    let remaining: i64 = conn
        .query_row("SELECT COUNT(*) FROM note_tags;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(remaining, 0);
}
