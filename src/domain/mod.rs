// src/domain/mod.rs
pub mod error;
pub mod note;

pub use error::{DomainError, FieldError, FieldErrors, FormField};
pub use note::{NewNote, Note, NoteTag, NotesPage, TagFilter};
