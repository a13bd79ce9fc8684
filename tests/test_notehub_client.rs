mod helpers;

use helpers::{client_for, note_json, page_json, test_notes, TOKEN};
use notehub::application::NoteRepository;
use notehub::domain::{DomainError, NewNote, NoteTag, TagFilter};
use notehub::infrastructure::NotehubClient;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn given_all_tag_when_listing_then_omits_tag_parameter() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![], 0)))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    client.list_notes("", 1, TagFilter::All).await.unwrap();

    // Assert
    let requests = server.received_requests().await.unwrap();
    let params: Vec<(String, String)> = requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        params,
        vec![
            ("search".to_string(), String::new()),
            ("page".to_string(), "1".to_string()),
            ("perPage".to_string(), "9".to_string()),
        ]
    );
}

#[tokio::test]
async fn given_tag_and_search_when_listing_then_sends_all_parameters_and_token() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/notes"))
        .and(query_param("search", "milk"))
        .and(query_param("page", "2"))
        .and(query_param("perPage", "9"))
        .and(query_param("tag", "Shopping"))
        .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(
            vec![note_json(test_notes::MILK, "Buy milk", "Shopping")],
            4,
        )))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let page = client
        .list_notes("milk", 2, TagFilter::Tag(NoteTag::Shopping))
        .await
        .unwrap();

    // Assert
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.notes.len(), 1);
    assert_eq!(page.notes[0].id, test_notes::MILK);
    assert_eq!(page.notes[0].tag, NoteTag::Shopping);
}

#[tokio::test]
async fn given_new_note_when_creating_then_posts_json_body() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/notes"))
        .and(header("Authorization", format!("Bearer {TOKEN}").as_str()))
        .and(body_json(json!({
            "title": "Standup",
            "content": "Sync with the team",
            "tag": "Meeting"
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(note_json(test_notes::STANDUP, "Standup", "Meeting")),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);
    let new_note = NewNote {
        title: "Standup".to_string(),
        content: "Sync with the team".to_string(),
        tag: NoteTag::Meeting,
    };

    // Act
    let created = client.create_note(&new_note).await.unwrap();

    // Assert
    assert_eq!(created.id, test_notes::STANDUP);
    assert_eq!(created.tag, NoteTag::Meeting);
}

#[tokio::test]
async fn given_existing_note_when_deleting_then_returns_echo() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("/api/notes/{}", test_notes::MILK)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(note_json(test_notes::MILK, "Buy milk", "Shopping")),
        )
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let deleted = client.delete_note(test_notes::MILK).await.unwrap();

    // Assert
    assert_eq!(deleted.title, "Buy milk");
}

#[tokio::test]
async fn given_existing_note_when_getting_by_id_then_returns_note() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/notes/{}", test_notes::STANDUP)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(note_json(test_notes::STANDUP, "Standup", "Meeting")),
        )
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let note = client.get_note(test_notes::STANDUP).await.unwrap();

    // Assert
    assert_eq!(note.title, "Standup");
    assert!(note.updated_at > note.created_at);
}

#[tokio::test]
async fn given_error_status_when_getting_note_then_returns_request_failed() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/api/notes/{}", test_notes::NONEXISTENT)))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Note not found"})),
        )
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let result = client.get_note(test_notes::NONEXISTENT).await;

    // Assert
    match result {
        Err(DomainError::RequestFailed(message)) => assert!(message.contains("404")),
        other => panic!("Expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn given_unauthorized_when_creating_then_returns_request_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/notes"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    let client = client_for(&server);
    let new_note = NewNote {
        title: "Standup".to_string(),
        content: String::new(),
        tag: NoteTag::Meeting,
    };

    let result = client.create_note(&new_note).await;

    assert!(matches!(result, Err(DomainError::RequestFailed(_))));
}

#[tokio::test]
async fn given_malformed_body_when_listing_then_returns_request_failed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let result = client.list_notes("", 1, TagFilter::All).await;

    assert!(matches!(result, Err(DomainError::RequestFailed(_))));
}

#[tokio::test]
async fn given_unreachable_server_when_listing_then_returns_request_failed() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);
    let client = NotehubClient::new(&uri, None).unwrap();

    let result = client.list_notes("", 1, TagFilter::All).await;

    assert!(matches!(result, Err(DomainError::RequestFailed(_))));
}

#[tokio::test]
async fn given_no_token_when_listing_then_sends_no_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/notes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_json(vec![], 0)))
        .mount(&server)
        .await;
    let client = NotehubClient::new(&server.uri(), None).unwrap();

    client.list_notes("", 1, TagFilter::All).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn given_id_with_query_character_when_deleting_then_targets_single_encoded_segment() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/notes/a%3Fb"))
        .respond_with(ResponseTemplate::new(200).set_body_json(note_json("a?b", "Odd", "Todo")))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server);

    // Act
    let deleted = client.delete_note("a?b").await.unwrap();

    // Assert
    assert_eq!(deleted.id, "a?b");
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}
