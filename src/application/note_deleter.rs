// src/application/note_deleter.rs
use crate::application::{NoteRepository, QueryCache, QueryKey};
use crate::domain::{DomainError, Note};
use tracing::info;

pub struct NoteDeleter<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteDeleter<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Delete a note and drop every cached list plus the note's own entry.
    /// Returns the deleted note as echoed by the service.
    pub async fn delete_note(
        &self,
        cache: &mut QueryCache,
        note_id: &str,
    ) -> Result<Note, DomainError> {
        let deleted = self.repository.delete_note(note_id).await?;
        cache.invalidate(&QueryKey::all_notes());
        cache.invalidate(&QueryKey::note(note_id));
        info!(note_id, title = %deleted.title, "Deleted note");
        Ok(deleted)
    }
}
