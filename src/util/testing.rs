// src/util/testing.rs

use anyhow::Result;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::env;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{NoteRepository, Notifier};
use crate::constants::NOTES_PER_PAGE;
use crate::domain::{DomainError, NewNote, Note, NoteTag, NotesPage, TagFilter};

/// Repository operations, used to record calls and inject failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Delete,
    Get,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RepoCall {
    List {
        search: String,
        page: u32,
        tag: TagFilter,
    },
    Create(NewNote),
    Delete(String),
    Get(String),
}

impl RepoCall {
    pub fn operation(&self) -> Operation {
        match self {
            RepoCall::List { .. } => Operation::List,
            RepoCall::Create(_) => Operation::Create,
            RepoCall::Delete(_) => Operation::Delete,
            RepoCall::Get(_) => Operation::Get,
        }
    }
}

type PageKey = (String, u32, TagFilter);

#[derive(Debug)]
struct MockState {
    notes: Mutex<BTreeMap<String, Note>>,
    pages: HashMap<PageKey, NotesPage>,
    failing: HashSet<Operation>,
    calls: Mutex<Vec<RepoCall>>,
    next_id: Mutex<u64>,
}

/// In-memory stand-in for the remote notes service.
///
/// Clones share state, so a test can hand one clone to the code under test
/// and inspect recorded calls through another.
///
/// # Examples
///
/// ```
/// use notehub::util::testing::{sample_note, MockNoteRepository, Operation};
/// use notehub::domain::NoteTag;
///
/// let mock = MockNoteRepository::builder()
///     .with_note(sample_note("n1", "Buy milk", NoteTag::Shopping))
///     .failing(Operation::Delete)
///     .build();
/// assert_eq!(mock.call_count(Operation::List), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MockNoteRepository {
    state: Arc<MockState>,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    pub fn calls(&self) -> Vec<RepoCall> {
        self.state.calls.lock().expect("calls lock").clone()
    }

    pub fn call_count(&self, operation: Operation) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.operation() == operation)
            .count()
    }

    pub fn stored_ids(&self) -> Vec<String> {
        self.state
            .notes
            .lock()
            .expect("notes lock")
            .keys()
            .cloned()
            .collect()
    }

    fn record(&self, call: RepoCall) -> Result<(), DomainError> {
        let operation = call.operation();
        self.state.calls.lock().expect("calls lock").push(call);
        if self.state.failing.contains(&operation) {
            return Err(DomainError::RequestFailed(
                "HTTP 500 Internal Server Error".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl NoteRepository for MockNoteRepository {
    async fn list_notes(
        &self,
        search: &str,
        page: u32,
        tag: TagFilter,
    ) -> Result<NotesPage, DomainError> {
        self.record(RepoCall::List {
            search: search.to_string(),
            page,
            tag,
        })?;

        if let Some(configured) = self.state.pages.get(&(search.to_string(), page, tag)) {
            return Ok(configured.clone());
        }

        // Default behavior: filter stored notes and paginate like the service
        let notes = self.state.notes.lock().expect("notes lock");
        let matching: Vec<Note> = notes
            .values()
            .filter(|n| tag.tag().map_or(true, |t| n.tag == t))
            .filter(|n| {
                search.is_empty() || n.title.contains(search) || n.content.contains(search)
            })
            .cloned()
            .collect();
        let per_page = NOTES_PER_PAGE as usize;
        let total_pages = matching.len().div_ceil(per_page) as u32;
        let start = (page.max(1) as usize - 1) * per_page;

        Ok(NotesPage {
            notes: matching.into_iter().skip(start).take(per_page).collect(),
            total_pages,
        })
    }

    async fn create_note(&self, note: &NewNote) -> Result<Note, DomainError> {
        self.record(RepoCall::Create(note.clone()))?;

        let id = {
            let mut next_id = self.state.next_id.lock().expect("id lock");
            *next_id += 1;
            format!("created-{}", *next_id)
        };
        let now = Utc::now();
        let created = Note {
            id: id.clone(),
            title: note.title.clone(),
            content: note.content.clone(),
            tag: note.tag,
            created_at: now,
            updated_at: now,
        };
        self.state
            .notes
            .lock()
            .expect("notes lock")
            .insert(id, created.clone());
        Ok(created)
    }

    async fn delete_note(&self, id: &str) -> Result<Note, DomainError> {
        self.record(RepoCall::Delete(id.to_string()))?;
        self.state
            .notes
            .lock()
            .expect("notes lock")
            .remove(id)
            .ok_or_else(|| DomainError::RequestFailed("HTTP 404 Not Found".to_string()))
    }

    async fn get_note(&self, id: &str) -> Result<Note, DomainError> {
        self.record(RepoCall::Get(id.to_string()))?;
        self.state
            .notes
            .lock()
            .expect("notes lock")
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::RequestFailed("HTTP 404 Not Found".to_string()))
    }
}

/// Builder for MockNoteRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteRepositoryBuilder {
    notes: BTreeMap<String, Note>,
    pages: HashMap<PageKey, NotesPage>,
    failing: HashSet<Operation>,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: BTreeMap::new(),
            pages: HashMap::new(),
            failing: HashSet::new(),
        }
    }

    /// Store a note that list, get and delete will see
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.insert(note.id.clone(), note);
        self
    }

    /// Configure the exact page returned for one list query
    pub fn with_page(mut self, search: &str, page: u32, tag: TagFilter, result: NotesPage) -> Self {
        self.pages.insert((search.to_string(), page, tag), result);
        self
    }

    /// Make every call of `operation` fail like a non-success HTTP response
    pub fn failing(mut self, operation: Operation) -> Self {
        self.failing.insert(operation);
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            state: Arc::new(MockState {
                notes: Mutex::new(self.notes),
                pages: self.pages,
                failing: self.failing,
                calls: Mutex::new(Vec::new()),
                next_id: Mutex::new(0),
            }),
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

/// Notifier that keeps every message for later assertions
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<Notification> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push(Notification::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push(Notification::Error(message.to_string()));
    }
}

/// Note with fixed timestamps for deterministic assertions
pub fn sample_note(id: &str, title: &str, tag: NoteTag) -> Note {
    let created_at = Utc
        .with_ymd_and_hms(2025, 3, 14, 9, 26, 53)
        .single()
        .unwrap_or_else(Utc::now);
    Note {
        id: id.to_string(),
        title: title.to_string(),
        content: format!("Content of {title}"),
        tag,
        created_at,
        updated_at: created_at,
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "mio", "wiremock"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
