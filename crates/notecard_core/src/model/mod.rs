//! Domain model for the note editor.
//!
//! # Responsibility
//! - Define the persisted note shape and its update payload.
//! - Provide the ordered tag collection used while editing.
//! - Expose read-only helpers over the markdown notes body.

pub mod note;
pub mod sections;
pub mod tag_set;
