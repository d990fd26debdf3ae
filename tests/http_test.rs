mod common;

use common::MockServer;
use noteboard::api::{HttpNotesApi, NotesApi};
use noteboard::error::NotesError;
use noteboard::types::{NoteDraft, NoteId};
use reqwest::Client;
use url::Url;

const ACTIVE: &str = r#"{"status":"success","message":"Notes retrieved","data":[
    {"id":"notes-jT-jjsyz61J8XKiI","title":"Welcome to Notes","body":"Welcome to Notes! This is your first note.","createdAt":"2022-07-28T10:03:12.594Z","archived":false}
]}"#;

const ARCHIVED: &str = r#"{"status":"success","message":"Notes retrieved","data":[
    {"id":"notes-aB-cdefg","title":"Old plans","body":"Kept for reference only.","createdAt":"2022-05-01T08:00:00.000Z","archived":true}
]}"#;

fn api(server: &MockServer) -> HttpNotesApi {
    HttpNotesApi::with_client(Client::new(), Url::parse(&server.url()).unwrap())
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_list_active_and_archived() {
    let server = MockServer::start();
    server.respond("GET", "/notes", 200, ACTIVE);
    server.respond("GET", "/notes/archived", 200, ARCHIVED);
    let api = api(&server);

    let active = api.list_active().await.unwrap();
    let archived = api.list_archived().await.unwrap();

    assert_eq!(active.len(), 1);
    assert_eq!(active[0].title, "Welcome to Notes");
    assert!(!active[0].archived);
    assert_eq!(archived[0].id, NoteId::from("notes-aB-cdefg"));
    assert!(archived[0].archived);
    assert_eq!(
        server.request_lines(),
        vec!["GET /v2/notes", "GET /v2/notes/archived"]
    );
}

#[tokio::test]
async fn test_list_failure_carries_server_message() {
    let server = MockServer::start();
    server.respond(
        "GET",
        "/notes",
        500,
        r#"{"status":"error","message":"Database unavailable"}"#,
    );

    let err = api(&server).list_active().await.unwrap_err();
    match err {
        NotesError::Service { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message.as_deref(), Some("Database unavailable"));
        }
        other => panic!("expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_envelope_is_decode_error() {
    let server = MockServer::start();
    server.respond("GET", "/notes", 200, r#"{"status":"success"}"#);

    let err = api(&server).list_active().await.unwrap_err();
    assert!(matches!(err, NotesError::Decode(_)));
}

// ============================================================================
// Mutations
// ============================================================================

#[tokio::test]
async fn test_create_posts_title_and_body() {
    let server = MockServer::start();
    server.respond(
        "POST",
        "/notes",
        201,
        r#"{"status":"success","message":"Note created","data":{"id":"notes-new","title":"Groceries","body":"Milk and eggs","createdAt":"2024-03-01T09:00:00.000Z","archived":false}}"#,
    );

    let note = api(&server)
        .create(&NoteDraft::new("Groceries", "Milk and eggs"))
        .await
        .unwrap();
    assert_eq!(note.id, NoteId::from("notes-new"));

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    let payload: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(
        payload,
        serde_json::json!({ "title": "Groceries", "body": "Milk and eggs" })
    );
}

#[tokio::test]
async fn test_delete_unknown_note() {
    let server = MockServer::start();
    server.respond(
        "DELETE",
        "/notes/notes-missing",
        404,
        r#"{"status":"fail","message":"Note is not found"}"#,
    );

    let err = api(&server)
        .delete(&NoteId::from("notes-missing"))
        .await
        .unwrap_err();
    assert_eq!(err.user_message("Failed to delete note"), "Note is not found");
}

#[tokio::test]
async fn test_archive_accepts_body_without_data() {
    let server = MockServer::start();
    server.respond(
        "POST",
        "/notes/notes-1/archive",
        200,
        r#"{"status":"success","message":"Note archived"}"#,
    );
    server.respond("POST", "/notes/notes-1/unarchive", 200, "");
    let api = api(&server);

    api.archive(&NoteId::from("notes-1")).await.unwrap();
    api.unarchive(&NoteId::from("notes-1")).await.unwrap();

    assert_eq!(
        server.request_lines(),
        vec![
            "POST /v2/notes/notes-1/archive",
            "POST /v2/notes/notes-1/unarchive"
        ]
    );
}

#[tokio::test]
async fn test_archive_failure_without_message() {
    let server = MockServer::start();
    server.respond("POST", "/notes/notes-1/archive", 503, "Service Unavailable");

    let err = api(&server)
        .archive(&NoteId::from("notes-1"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        NotesError::Service {
            status: 503,
            message: None
        }
    ));
    assert_eq!(err.user_message("Failed to archive note"), "Failed to archive note");
}

#[tokio::test]
async fn test_unreachable_service_is_network_error() {
    let server = MockServer::start();
    let url = server.url();
    drop(server);

    let api = HttpNotesApi::with_client(Client::new(), Url::parse(&url).unwrap());
    let err = api.list_active().await.unwrap_err();
    assert!(matches!(err, NotesError::Network(_)));
    assert_eq!(err.user_message("Failed to get notes"), "Failed to get notes");
}

// ============================================================================
// Test server
// ============================================================================

#[tokio::test]
async fn test_server_records_chunked_request_body() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    let server = MockServer::start();
    server.respond("POST", "/notes", 201, r#"{"status":"success","data":{}}"#);

    let mut stream = TcpStream::connect(server.addr()).await.unwrap();
    stream
        .write_all(
            b"POST /v2/notes HTTP/1.1\r\n\
              Host: localhost\r\n\
              Content-Type: application/json\r\n\
              Transfer-Encoding: chunked\r\n\
              Connection: close\r\n\
              \r\n\
              b\r\n{\"title\":\"G\r\n\
              a\r\nroceries\"}\r\n\
              0\r\n\r\n",
        )
        .await
        .unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    let response = String::from_utf8_lossy(&response);
    assert!(response.starts_with("HTTP/1.1 201"), "got: {response}");

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/v2/notes");
    assert_eq!(requests[0].body, r#"{"title":"Groceries"}"#);
}
