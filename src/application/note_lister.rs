// src/application/note_lister.rs
use crate::application::{NoteRepository, QueryCache, QueryData, QueryKey};
use crate::domain::{DomainError, NotesPage, TagFilter};
use tracing::{debug, instrument};

/// Parameters of one list query
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NotesQuery {
    pub search: String,
    pub page: u32,
    pub tag: TagFilter,
}

impl NotesQuery {
    pub fn new(search: impl Into<String>, page: u32, tag: TagFilter) -> Self {
        Self {
            search: search.into(),
            page: page.max(1),
            tag,
        }
    }
}

impl Default for NotesQuery {
    fn default() -> Self {
        Self::new("", 1, TagFilter::All)
    }
}

pub struct NoteLister<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// List one page of notes, served from `cache` while the entry is fresh
    #[instrument(level = "debug", skip(self, cache))]
    pub async fn list_notes(
        &self,
        cache: &mut QueryCache,
        query: &NotesQuery,
    ) -> Result<NotesPage, DomainError> {
        let key = QueryKey::notes(query);
        if let Some(QueryData::Notes(page)) = cache.get(&key) {
            debug!(%key, "Serving notes from cache");
            return Ok(page.clone());
        }

        let page = self
            .repository
            .list_notes(&query.search, query.page, query.tag)
            .await?;
        cache.insert(key, QueryData::Notes(page.clone()));
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NoteTag;
    use crate::util::testing::{sample_note, MockNoteRepository, Operation, RepoCall};
    use std::time::Duration;

    fn repo() -> MockNoteRepository {
        MockNoteRepository::builder()
            .with_note(sample_note("1", "What is a Tree?", NoteTag::Work))
            .with_note(sample_note("2", "What is a Graph?", NoteTag::Personal))
            .build()
    }

    #[tokio::test]
    async fn given_no_search_when_listing_notes_then_returns_all_notes() {
        // Arrange
        let lister = NoteLister::new(repo());
        let mut cache = QueryCache::default();

        // Act
        let result = lister
            .list_notes(&mut cache, &NotesQuery::default())
            .await
            .unwrap();

        // Assert
        assert_eq!(result.notes.len(), 2);
        assert_eq!(result.total_pages, 1);
    }

    #[tokio::test]
    async fn given_search_query_when_listing_notes_then_forwards_search_and_tag() {
        // Arrange
        let mock = repo();
        let lister = NoteLister::new(mock.clone());
        let mut cache = QueryCache::default();
        let query = NotesQuery::new("Tree", 1, TagFilter::Tag(NoteTag::Work));

        // Act
        let result = lister.list_notes(&mut cache, &query).await.unwrap();

        // Assert
        assert_eq!(result.notes.len(), 1);
        assert_eq!(result.notes[0].id, "1");
        assert_eq!(
            mock.calls(),
            vec![RepoCall::List {
                search: "Tree".to_string(),
                page: 1,
                tag: TagFilter::Tag(NoteTag::Work),
            }]
        );
    }

    #[tokio::test]
    async fn given_cached_query_when_listing_again_then_skips_request() {
        let mock = repo();
        let lister = NoteLister::new(mock.clone());
        let mut cache = QueryCache::default();
        let query = NotesQuery::default();

        let first = lister.list_notes(&mut cache, &query).await.unwrap();
        let second = lister.list_notes(&mut cache, &query).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(mock.call_count(Operation::List), 1);
    }

    #[tokio::test]
    async fn given_different_page_when_listing_then_fetches_separately() {
        let mock = repo();
        let lister = NoteLister::new(mock.clone());
        let mut cache = QueryCache::default();

        lister
            .list_notes(&mut cache, &NotesQuery::new("", 1, TagFilter::All))
            .await
            .unwrap();
        lister
            .list_notes(&mut cache, &NotesQuery::new("", 2, TagFilter::All))
            .await
            .unwrap();

        assert_eq!(mock.call_count(Operation::List), 2);
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test]
    async fn given_stale_cache_when_listing_then_refetches() {
        let mock = repo();
        let lister = NoteLister::new(mock.clone());
        let mut cache = QueryCache::new(Duration::ZERO);
        let query = NotesQuery::default();

        lister.list_notes(&mut cache, &query).await.unwrap();
        lister.list_notes(&mut cache, &query).await.unwrap();

        assert_eq!(mock.call_count(Operation::List), 2);
    }

    #[tokio::test]
    async fn given_failing_service_when_listing_then_returns_error_and_caches_nothing() {
        let mock = MockNoteRepository::builder()
            .failing(Operation::List)
            .build();
        let lister = NoteLister::new(mock);
        let mut cache = QueryCache::default();

        let result = lister.list_notes(&mut cache, &NotesQuery::default()).await;

        assert!(matches!(result, Err(DomainError::RequestFailed(_))));
        assert!(cache.is_empty());
    }

    #[test]
    fn given_page_zero_when_building_query_then_clamps_to_first_page() {
        assert_eq!(NotesQuery::new("", 0, TagFilter::All).page, 1);
    }
}
