//! Storage collaborator contract and its implementations.
//!
//! # Responsibility
//! - Define the `NoteStore` seam consumed by the editor session.
//! - Provide an in-memory store and a SQLite-backed store.
//!
//! # Invariants
//! - Stores are authoritative; editor code only ever holds copies.
//! - `update_note` replaces the full field set of an existing note.

pub mod memory;
pub mod note_store;
pub mod sqlite;
