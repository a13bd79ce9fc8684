// src/application/mod.rs
pub mod form;
pub mod note_creator;
pub mod note_deleter;
pub mod note_lister;
pub mod note_viewer;
pub mod notifier;
pub mod query_cache;
pub mod repository;
pub mod session;

pub use form::{FormValues, NoteForm};
pub use note_creator::{NoteCreator, SubmitOutcome};
pub use note_deleter::NoteDeleter;
pub use note_lister::{NoteLister, NotesQuery};
pub use note_viewer::NoteViewer;
pub use notifier::Notifier;
pub use query_cache::{QueryCache, QueryData, QueryKey};
pub use repository::NoteRepository;
pub use session::Session;
