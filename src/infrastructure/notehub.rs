// src/infrastructure/notehub.rs
use crate::application::NoteRepository;
use crate::constants::{NOTES_PATH, NOTES_PER_PAGE};
use crate::domain::{DomainError, NewNote, Note, NoteTag, NotesPage, TagFilter};
use crate::infrastructure::Config;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, instrument};

#[derive(Debug, Serialize)]
struct ListParams<'a> {
    search: &'a str,
    page: u32,
    #[serde(rename = "perPage")]
    per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<NoteTag>,
}

/// HTTP client for the NoteHub API.
///
/// Each method is a single request; any non-success status, transport error
/// or undecodable body becomes `DomainError::RequestFailed`.
#[derive(Debug, Clone)]
pub struct NotehubClient {
    http: Client,
    base_url: Url,
}

impl NotehubClient {
    /// Build a client for `base_url`. The token, when present, is sent as
    /// `Authorization: Bearer <token>` on every request.
    pub fn new(base_url: &str, token: Option<&str>) -> Result<Self, DomainError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| DomainError::Config(format!("invalid base URL {base_url:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(DomainError::Config(format!(
                "base URL {base_url} cannot carry a path"
            )));
        }

        let mut headers = HeaderMap::new();
        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
                DomainError::Config("API token contains characters not allowed in a header".into())
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("notehub/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::Config(format!("failed to build HTTP client: {e}")))?;

        debug!(%base_url, authenticated = token.is_some(), "Created NoteHub client");
        Ok(Self { http, base_url })
    }

    pub fn from_config(config: &Config) -> Result<Self, DomainError> {
        Self::new(&config.api.base_url, config.api.token.as_deref())
    }

    /// `<base>/api/notes`, keeping any path prefix of the base URL
    fn notes_url(&self) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(NOTES_PATH);
        }
        url
    }

    /// `<base>/api/notes/<id>` with the id percent-encoded as one segment
    fn note_url(&self, id: &str) -> Result<Url, DomainError> {
        if id.is_empty() || id == "." || id == ".." {
            return Err(DomainError::RequestFailed(format!("invalid note id {id:?}")));
        }
        let mut url = self.notes_url();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(id);
        }
        Ok(url)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, DomainError> {
        let response = request
            .send()
            .await
            .map_err(|e| DomainError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            debug!(%status, "NoteHub returned an error status");
            return Err(DomainError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| DomainError::RequestFailed(format!("invalid response body: {e}")))
    }
}

#[async_trait]
impl NoteRepository for NotehubClient {
    #[instrument(level = "debug", skip(self))]
    async fn list_notes(
        &self,
        search: &str,
        page: u32,
        tag: TagFilter,
    ) -> Result<NotesPage, DomainError> {
        let params = ListParams {
            search,
            page,
            per_page: NOTES_PER_PAGE,
            tag: tag.tag(),
        };
        let result: NotesPage = self
            .send(self.http.get(self.notes_url()).query(&params))
            .await?;

        info!(
            count = result.notes.len(),
            total_pages = result.total_pages,
            "Fetched notes"
        );
        Ok(result)
    }

    #[instrument(level = "debug", skip(self, note), fields(title = %note.title, tag = %note.tag))]
    async fn create_note(&self, note: &NewNote) -> Result<Note, DomainError> {
        let created: Note = self.send(self.http.post(self.notes_url()).json(note)).await?;
        info!(note_id = %created.id, "Created note");
        Ok(created)
    }

    #[instrument(level = "debug", skip(self))]
    async fn delete_note(&self, id: &str) -> Result<Note, DomainError> {
        let deleted: Note = self.send(self.http.delete(self.note_url(id)?)).await?;
        info!(note_id = %deleted.id, "Deleted note");
        Ok(deleted)
    }

    #[instrument(level = "debug", skip(self))]
    async fn get_note(&self, id: &str) -> Result<Note, DomainError> {
        self.send(self.http.get(self.note_url(id)?)).await
    }
}
