// src/application/query_cache.rs
use crate::application::NotesQuery;
use crate::constants::{NOTES_QUERY_KEY, NOTE_QUERY_KEY};
use crate::domain::{Note, NotesPage};
use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Hierarchical cache key, e.g. `["notes", "milk", "2", "Shopping"]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<String>);

impl QueryKey {
    pub fn new<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(parts.into_iter().map(Into::into).collect())
    }

    /// Prefix matching every cached note list
    pub fn all_notes() -> Self {
        Self::new([NOTES_QUERY_KEY])
    }

    /// Key of one list query. An `all` filter is stored as an empty segment.
    pub fn notes(query: &NotesQuery) -> Self {
        let tag = query.tag.tag().map(|t| t.to_string()).unwrap_or_default();
        Self::new([
            NOTES_QUERY_KEY.to_string(),
            query.search.clone(),
            query.page.to_string(),
            tag,
        ])
    }

    pub fn note(id: &str) -> Self {
        Self::new([NOTE_QUERY_KEY, id])
    }

    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.0.starts_with(&prefix.0)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryData {
    Notes(NotesPage),
    Note(Note),
}

#[derive(Debug)]
struct CacheEntry {
    data: QueryData,
    fetched_at: Instant,
}

/// Client-side cache of query results.
///
/// Entries are served until they are older than `stale_time` or removed by
/// an invalidation. Invalidation drops every entry under a key prefix; there
/// is no merging of individual notes into cached lists.
#[derive(Debug)]
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
    stale_time: Duration,
    invalidations: usize,
}

impl QueryCache {
    pub fn new(stale_time: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stale_time,
            invalidations: 0,
        }
    }

    /// Fresh data for `key`, or `None` when missing or stale
    pub fn get(&self, key: &QueryKey) -> Option<&QueryData> {
        let entry = self.entries.get(key)?;
        if entry.fetched_at.elapsed() >= self.stale_time {
            trace!(%key, "Cache entry is stale");
            return None;
        }
        trace!(%key, "Cache hit");
        Some(&entry.data)
    }

    pub fn insert(&mut self, key: QueryKey, data: QueryData) {
        trace!(%key, "Caching query result");
        self.entries.insert(
            key,
            CacheEntry {
                data,
                fetched_at: Instant::now(),
            },
        );
    }

    /// Remove every entry whose key starts with `prefix`.
    ///
    /// Counts as a single invalidation no matter how many entries matched.
    /// Returns the number of removed entries.
    pub fn invalidate(&mut self, prefix: &QueryKey) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        let removed = before - self.entries.len();
        self.invalidations += 1;
        debug!(%prefix, removed, "Invalidated queries");
        removed
    }

    pub fn invalidation_count(&self) -> usize {
        self.invalidations
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: &QueryKey) -> bool {
        self.entries.contains_key(key)
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(crate::constants::DEFAULT_STALE_TIME_SECS))
    }
}
