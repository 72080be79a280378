//! Note editor session and its collaborators.
//!
//! # Responsibility
//! - Hold the working copy of one note (`NoteForm`).
//! - Sequence load and save against a `NoteStore`.
//! - Drive `Navigator` and `Notifier` side effects.

pub mod collaborators;
pub mod error;
pub mod form;
pub mod session;
