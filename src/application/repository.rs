// src/application/repository.rs
use crate::domain::{DomainError, NewNote, Note, NotesPage, TagFilter};
use async_trait::async_trait;

/// Remote note storage. Every call is one request, with no retries.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Fetch one page of notes matching `search`, optionally narrowed to a tag
    async fn list_notes(
        &self,
        search: &str,
        page: u32,
        tag: TagFilter,
    ) -> Result<NotesPage, DomainError>;

    async fn create_note(&self, note: &NewNote) -> Result<Note, DomainError>;

    /// Delete a note; the service echoes the removed note back
    async fn delete_note(&self, id: &str) -> Result<Note, DomainError>;

    async fn get_note(&self, id: &str) -> Result<Note, DomainError>;
}
