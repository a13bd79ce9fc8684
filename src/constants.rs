// src/constants.rs
//
// Application-wide constants shared by the API client, the form and the CLI.

/// Base URL of the hosted NoteHub API.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_BASE_URL: &str = "https://notehub-public.goit.study";

/// Path of the notes collection endpoint, relative to the base URL.
pub const NOTES_PATH: [&str; 2] = ["api", "notes"];

/// Page size requested on every list call. The API paginates server side.
///
/// Used in: `infrastructure/notehub.rs`
pub const NOTES_PER_PAGE: u32 = 9;

/// Root segment of every list query key; creation invalidates everything below it.
pub const NOTES_QUERY_KEY: &str = "notes";

/// Root segment of single note query keys.
pub const NOTE_QUERY_KEY: &str = "note";

/// Seconds a cached query result is served without refetching.
pub const DEFAULT_STALE_TIME_SECS: u64 = 60;

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 50;
pub const CONTENT_MAX_CHARS: usize = 500;

/// Environment variables overriding the config file.
pub const TOKEN_ENV_VAR: &str = "NOTEHUB_TOKEN";
pub const BASE_URL_ENV_VAR: &str = "NOTEHUB_BASE_URL";

pub const CREATED_MESSAGE: &str = "Note created!";
pub const DELETED_MESSAGE: &str = "Note deleted";
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong...";

/// Delay in milliseconds after spawning the browser before the process may exit.
///
/// The temp directory holding the rendered page is removed on drop. The browser
/// needs a brief moment to read the file before that happens.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 500;

/// Characters of note content shown per row in terminal listings.
pub const EXCERPT_CHARS: usize = 60;
