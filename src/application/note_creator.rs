// src/application/note_creator.rs
use crate::application::{NoteForm, NoteRepository, Notifier, QueryCache, QueryKey};
use crate::constants::{CREATED_MESSAGE, GENERIC_ERROR_MESSAGE};
use crate::domain::{DomainError, Note};
use tracing::{info, instrument, warn};

#[derive(Debug)]
pub enum SubmitOutcome {
    /// Nothing was sent: the form is invalid, closed or already pending
    Rejected,
    Created(Note),
    Failed(DomainError),
}

pub struct NoteCreator<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteCreator<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Submit the creation form.
    ///
    /// On success every `notes` query is invalidated once and the form is
    /// dismissed. On failure the user gets the generic error notification and
    /// the form stays open.
    #[instrument(level = "debug", skip_all)]
    pub async fn submit(
        &self,
        form: &mut NoteForm,
        cache: &mut QueryCache,
        notifier: &dyn Notifier,
    ) -> SubmitOutcome {
        let Some(new_note) = form.begin_submit() else {
            return SubmitOutcome::Rejected;
        };

        match self.repository.create_note(&new_note).await {
            Ok(note) => {
                info!(note_id = %note.id, tag = %note.tag, "Created note");
                notifier.success(CREATED_MESSAGE);
                cache.invalidate(&QueryKey::all_notes());
                form.dismiss();
                SubmitOutcome::Created(note)
            }
            Err(e) => {
                warn!(error = %e, "Note creation failed");
                notifier.error(GENERIC_ERROR_MESSAGE);
                form.submit_failed();
                SubmitOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{NotesQuery, QueryData};
    use crate::domain::{FormField, NoteTag, NotesPage};
    use crate::util::testing::{MockNoteRepository, Notification, Operation, RecordingNotifier};

    fn filled_form(title: &str, tag: &str) -> NoteForm {
        let mut form = NoteForm::open();
        form.set(FormField::Title, title);
        form.set(FormField::Content, "agenda");
        form.set(FormField::Tag, tag);
        form
    }

    fn cache_with_list() -> QueryCache {
        let mut cache = QueryCache::default();
        cache.insert(
            QueryKey::notes(&NotesQuery::default()),
            QueryData::Notes(NotesPage {
                notes: vec![],
                total_pages: 0,
            }),
        );
        cache
    }

    #[tokio::test]
    async fn given_valid_form_when_submitting_then_creates_and_dismisses() {
        let mock = MockNoteRepository::builder().build();
        let creator = NoteCreator::new(mock.clone());
        let mut form = filled_form("Standup", "Meeting");
        let mut cache = cache_with_list();
        let notifier = RecordingNotifier::new();

        let outcome = creator.submit(&mut form, &mut cache, &notifier).await;

        let SubmitOutcome::Created(note) = outcome else {
            panic!("Expected Created outcome");
        };
        assert_eq!(note.tag, NoteTag::Meeting);
        assert!(!form.is_open());
        assert!(cache.is_empty());
        assert_eq!(cache.invalidation_count(), 1);
        assert_eq!(
            notifier.messages(),
            vec![Notification::Success("Note created!".to_string())]
        );
    }

    #[tokio::test]
    async fn given_invalid_form_when_submitting_then_sends_nothing() {
        let mock = MockNoteRepository::builder().build();
        let creator = NoteCreator::new(mock.clone());
        let mut form = filled_form("ab", "Meeting");
        let mut cache = cache_with_list();
        let notifier = RecordingNotifier::new();

        let outcome = creator.submit(&mut form, &mut cache, &notifier).await;

        assert!(matches!(outcome, SubmitOutcome::Rejected));
        assert_eq!(mock.call_count(Operation::Create), 0);
        assert_eq!(cache.invalidation_count(), 0);
        assert!(notifier.messages().is_empty());
        assert!(form.is_open());
    }

    #[tokio::test]
    async fn given_failing_service_when_submitting_then_notifies_generic_error() {
        let mock = MockNoteRepository::builder()
            .failing(Operation::Create)
            .build();
        let creator = NoteCreator::new(mock);
        let mut form = filled_form("Standup", "Meeting");
        let mut cache = cache_with_list();
        let notifier = RecordingNotifier::new();

        let outcome = creator.submit(&mut form, &mut cache, &notifier).await;

        assert!(matches!(outcome, SubmitOutcome::Failed(_)));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.invalidation_count(), 0);
        assert!(form.is_open());
        assert!(!form.is_pending());
        assert_eq!(
            notifier.messages(),
            vec![Notification::Error("Something went wrong...".to_string())]
        );
    }
}
