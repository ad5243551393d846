//! Integration tests against a canned single-shot HTTP server.

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use statementledger_client::{BackendClient, Error};
use statementledger_core::{
    Document, MemoryStore, PreviewController, PreviewError, PreviewRequest, PreviewStatus,
    Resolution, UserIdentity,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio_test::{assert_err, assert_ok};

/// Serve exactly one response, returning the base URL and the captured request.
async fn serve_once(
    status_line: &str,
    content_type: &str,
    body: &[u8],
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut response = format!(
        "HTTP/1.1 {status_line}\r\ncontent-type: {content_type}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
        body.len()
    )
    .into_bytes();
    response.extend_from_slice(body);

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        socket.write_all(&response).await.unwrap();
        socket.shutdown().await.unwrap();
        request
    });

    (format!("http://{addr}"), handle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + content_length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn request_body(raw: &str) -> serde_json::Value {
    let (_, body) = raw.split_once("\r\n\r\n").unwrap();
    serde_json::from_str(body).unwrap()
}

fn user() -> UserIdentity {
    UserIdentity::new("priya@example.com")
}

fn preview_request(password: Option<&str>) -> PreviewRequest {
    let document = Document::new("18f0a", "statement.pdf", "HDFC Credit Card Statement");
    PreviewRequest::new(&user(), &document, password)
}

#[tokio::test]
async fn test_list_documents() {
    let listing = br#"{"pdf_attachments": [
        {"subject": "HDFC Credit Card Statement", "filename": "cc.pdf", "message_id": "1",
         "total_amount_due": 1000.0, "minimum_amount_due": 100.0, "days_left": 5},
        {"subject": "Account Statement", "filename": "bank.pdf", "message_id": "2"}
    ]}"#;
    let (base, server) = serve_once("200 OK", "application/json", listing).await;

    let client = BackendClient::new(&base).unwrap();
    let documents = assert_ok!(client.list_documents(&user()).await);

    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0].total_amount_due, Some(1000.0));
    assert_eq!(documents[1].days_left, None);

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /gmail/list-pdfs?user_email=priya%40example.com "));
}

#[tokio::test]
async fn test_list_documents_surfaces_detail() {
    let (base, server) = serve_once(
        "403 Forbidden",
        "application/json",
        br#"{"detail": "Gmail access not granted"}"#,
    )
    .await;

    let client = BackendClient::new(&base).unwrap();
    let err = assert_err!(client.list_documents(&user()).await);
    server.await.unwrap();

    match err {
        Error::Status { status, detail } => {
            assert_eq!(status, 403);
            assert_eq!(detail, "Gmail access not granted");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_list_documents_rejects_bad_listing() {
    let (base, server) = serve_once("200 OK", "text/html", b"<html>login</html>").await;

    let client = BackendClient::new(&base).unwrap();
    let err = assert_err!(client.list_documents(&user()).await);
    server.await.unwrap();

    assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn test_fetch_preview_returns_bytes() {
    let (base, server) = serve_once("200 OK", "application/pdf", b"%PDF-1.7 body").await;

    let client = BackendClient::new(&base).unwrap();
    let bytes = assert_ok!(client.fetch_preview(&preview_request(None)).await);
    assert_eq!(bytes.as_ref(), b"%PDF-1.7 body");

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /gmail/preview "));
    let body = request_body(&request);
    assert_eq!(body["user_email"], "priya@example.com");
    assert_eq!(body["message_id"], "18f0a");
    assert_eq!(body["filename"], "statement.pdf");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_fetch_preview_password_required() {
    let (base, server) = serve_once(
        "401 Unauthorized",
        "application/json",
        br#"{"detail": "PASSWORD_REQUIRED"}"#,
    )
    .await;

    let client = BackendClient::new(&base).unwrap();
    let err = assert_err!(client.fetch_preview(&preview_request(None)).await);
    server.await.unwrap();

    assert_eq!(err, PreviewError::AuthRequired);
}

#[tokio::test]
async fn test_fetch_preview_password_incorrect() {
    let (base, server) = serve_once(
        "401 Unauthorized",
        "application/json",
        br#"{"detail": "PASSWORD_INCORRECT"}"#,
    )
    .await;

    let client = BackendClient::new(&base).unwrap();
    let err = assert_err!(client.fetch_preview(&preview_request(Some("1234"))).await);

    let request = server.await.unwrap();
    assert_eq!(request_body(&request)["password"], "1234");
    assert_eq!(err, PreviewError::AuthIncorrect);
}

#[tokio::test]
async fn test_fetch_preview_server_detail() {
    let (base, server) = serve_once(
        "404 Not Found",
        "application/json",
        br#"{"detail": "File not found"}"#,
    )
    .await;

    let client = BackendClient::new(&base).unwrap();
    let err = assert_err!(client.fetch_preview(&preview_request(None)).await);
    server.await.unwrap();

    assert_eq!(err.user_message(), "File not found");
}

#[tokio::test]
async fn test_fetch_preview_opaque_failure() {
    let (base, server) = serve_once("500 Internal Server Error", "text/plain", b"oops").await;

    let client = BackendClient::new(&base).unwrap();
    let err = assert_err!(client.fetch_preview(&preview_request(None)).await);
    server.await.unwrap();

    assert_eq!(
        err,
        PreviewError::Server {
            status: 500,
            detail: None,
        }
    );
    assert_eq!(err.user_message(), "Failed to load preview");
}

#[tokio::test]
async fn test_fetch_preview_transport_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = BackendClient::new(format!("http://{addr}")).unwrap();
    let err = assert_err!(client.fetch_preview(&preview_request(None)).await);

    assert!(matches!(err, PreviewError::Transport(_)));
}

#[tokio::test]
async fn test_controller_over_http_prompts_for_password() {
    let (base, server) = serve_once(
        "401 Unauthorized",
        "application/json",
        br#"{"detail": "PASSWORD_REQUIRED"}"#,
    )
    .await;

    let client = BackendClient::new(&base).unwrap();
    let controller = PreviewController::new(client, user(), MemoryStore::default());

    let document = Document::new("18f0a", "statement.pdf", "HDFC Credit Card Statement");
    let resolution = controller.open(document).await;
    server.await.unwrap();

    assert_eq!(
        resolution,
        Resolution::Applied(PreviewStatus::AwaitingPassword)
    );
    controller
        .inspect(|session| {
            assert_eq!(session.error_message(), None);
            assert_eq!(session.store().allocations(), 0);
        })
        .await;
}

#[test]
fn test_download_url_through_client() {
    let client = BackendClient::new("http://localhost:8000").unwrap();
    let url = client.download_url(&user(), "18f0a", "statement.pdf");
    assert_eq!(
        url.as_str(),
        "http://localhost:8000/gmail/download?user_email=priya%40example.com&message_id=18f0a&filename=statement.pdf"
    );
}
