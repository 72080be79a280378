//! SQLite storage bootstrap and schema migration entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections backing `SqliteNoteStore`.
//! - Apply schema migrations in deterministic order.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Notes must not be read or written before migrations succeed.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure while preparing a notecard database.
#[derive(Debug)]
pub enum DbError {
    /// The file could not be opened or its connection pragmas failed.
    Open(rusqlite::Error),
    /// Schema step `version` failed; no step of that run was kept.
    Migration {
        version: u32,
        source: rusqlite::Error,
    },
    /// The file was written by a build with a newer notes schema.
    SchemaTooNew { found: u32, supported: u32 },
}

impl DbError {
    /// Schema step that failed, if the error came from a migration.
    pub fn failed_version(&self) -> Option<u32> {
        match self {
            Self::Migration { version, .. } => Some(*version),
            _ => None,
        }
    }
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open(err) => write!(f, "cannot open notes database: {err}"),
            Self::Migration { version, source } => {
                write!(f, "notes schema migration {version} failed: {source}")
            }
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "notes database uses schema {found}, this build supports up to {supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open(err) | Self::Migration { source: err, .. } => Some(err),
            Self::SchemaTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Open(value)
    }
}
