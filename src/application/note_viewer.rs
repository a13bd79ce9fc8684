// src/application/note_viewer.rs
use crate::application::{NoteRepository, QueryCache, QueryData, QueryKey};
use crate::domain::{DomainError, Note};
use tracing::debug;

pub struct NoteViewer<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteViewer<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn view_note(
        &self,
        cache: &mut QueryCache,
        note_id: &str,
    ) -> Result<Note, DomainError> {
        let key = QueryKey::note(note_id);
        if let Some(QueryData::Note(note)) = cache.get(&key) {
            debug!(note_id, "Serving note from cache");
            return Ok(note.clone());
        }

        let note = self.repository.get_note(note_id).await?;
        cache.insert(key, QueryData::Note(note.clone()));
        Ok(note)
    }
}
