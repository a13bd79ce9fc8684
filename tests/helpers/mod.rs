use notehub::infrastructure::NotehubClient;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";

/// Client pointed at the mock server, authenticated with `TOKEN`
pub fn client_for(server: &MockServer) -> NotehubClient {
    NotehubClient::new(&server.uri(), Some(TOKEN)).expect("client should build")
}

/// A note as the NoteHub API returns it
pub fn note_json(id: &str, title: &str, tag: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "content": format!("Content of {title}"),
        "tag": tag,
        "createdAt": "2025-05-01T08:30:00.000Z",
        "updatedAt": "2025-05-02T16:45:10.000Z"
    })
}

#[allow(dead_code)]
pub fn page_json(notes: Vec<Value>, total_pages: u32) -> Value {
    json!({ "notes": notes, "totalPages": total_pages })
}

/// Known note IDs used across the HTTP tests
#[allow(dead_code)]
pub mod test_notes {
    pub const MILK: &str = "6611f2a1c3b4d5e6f7a8b9c0";
    pub const STANDUP: &str = "6611f2a1c3b4d5e6f7a8b9c1";
    pub const NONEXISTENT: &str = "000000000000000000000000";
}
