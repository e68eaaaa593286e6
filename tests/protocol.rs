//! End-to-end protocol tests over real sockets.

use std::io::Read;

use flate2::read::GzDecoder;
use minnow::config::ServerConfig;

mod common;

fn status_line(head: &str) -> &str {
    head.lines().next().unwrap()
}

#[tokio::test]
async fn get_root_returns_welcome() {
    let addr = common::start_server(ServerConfig::default()).await;
    let raw = common::send_request(addr, b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n").await;
    let (head, body) = common::split_response(&raw);

    assert_eq!(status_line(&head), "HTTP/1.1 200 OK");
    assert_eq!(body, b"Welcome to the HTTP Server!");
    assert_eq!(common::header_value(&head, "Content-Length"), Some("27"));
    assert_eq!(
        common::header_value(&head, "Content-Type"),
        Some("text/plain")
    );
}

#[tokio::test]
async fn echo_returns_the_value() {
    let addr = common::start_server(ServerConfig::default()).await;
    let raw = common::send_request(addr, b"GET /echo/abc HTTP/1.1\r\nHost: x\r\n\r\n").await;
    let (head, body) = common::split_response(&raw);

    assert_eq!(status_line(&head), "HTTP/1.1 200 OK");
    assert_eq!(body, b"abc");
    assert_eq!(common::header_value(&head, "Content-Encoding"), None);
}

#[tokio::test]
async fn echo_honors_accept_encoding_gzip() {
    let addr = common::start_server(ServerConfig::default()).await;
    let raw = common::send_request(
        addr,
        b"GET /echo/abc HTTP/1.1\r\nHost: x\r\nAccept-Encoding: gzip\r\n\r\n",
    )
    .await;
    let (head, body) = common::split_response(&raw);

    assert_eq!(status_line(&head), "HTTP/1.1 200 OK");
    assert_eq!(common::header_value(&head, "Content-Encoding"), Some("gzip"));
    let reported: usize = common::header_value(&head, "Content-Length")
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(reported, body.len());

    let mut decoded = Vec::new();
    GzDecoder::new(body.as_slice())
        .read_to_end(&mut decoded)
        .unwrap();
    assert_eq!(decoded, b"abc");
}

#[tokio::test]
async fn unsupported_codec_is_not_compressed() {
    let addr = common::start_server(ServerConfig::default()).await;
    let raw = common::send_request(
        addr,
        b"GET /echo/abc HTTP/1.1\r\nHost: x\r\nAccept-Encoding: br\r\n\r\n",
    )
    .await;
    let (head, body) = common::split_response(&raw);

    assert_eq!(common::header_value(&head, "Content-Encoding"), None);
    assert_eq!(body, b"abc");
}

#[tokio::test]
async fn user_agent_is_echoed() {
    let addr = common::start_server(ServerConfig::default()).await;
    let raw = common::send_request(
        addr,
        b"GET /user-agent HTTP/1.1\r\nUser-Agent: test-client/1.0\r\n\r\n",
    )
    .await;
    let (head, body) = common::split_response(&raw);

    assert_eq!(status_line(&head), "HTTP/1.1 200 OK");
    assert_eq!(body, b"test-client/1.0");
}

#[tokio::test]
async fn unknown_route_gets_explanatory_404() {
    let addr = common::start_server(ServerConfig::default()).await;
    let raw = common::send_request(addr, b"GET /nope HTTP/1.1\r\nHost: x\r\n\r\n").await;
    let (head, body) = common::split_response(&raw);

    assert_eq!(status_line(&head), "HTTP/1.1 404 Not Found");
    assert!(!body.is_empty());
}

#[tokio::test]
async fn files_post_then_get_round_trips() {
    let (addr, _dir) = common::start_server_with_storage("post-get").await;

    let raw = common::send_request(
        addr,
        b"POST /files/note.txt HTTP/1.1\r\nHost: x\r\nContent-Length: 5\r\n\r\nhello",
    )
    .await;
    let (head, body) = common::split_response(&raw);
    assert_eq!(status_line(&head), "HTTP/1.1 201 Created");
    assert!(body.is_empty());

    let raw = common::send_request(addr, b"GET /files/note.txt HTTP/1.1\r\nHost: x\r\n\r\n").await;
    let (head, body) = common::split_response(&raw);
    assert_eq!(status_line(&head), "HTTP/1.1 200 OK");
    assert_eq!(
        common::header_value(&head, "Content-Type"),
        Some("application/octet-stream")
    );
    assert_eq!(body, b"hello");
}

#[tokio::test]
async fn missing_file_gets_empty_404() {
    let (addr, _dir) = common::start_server_with_storage("missing").await;
    let raw = common::send_request(addr, b"GET /files/absent.txt HTTP/1.1\r\nHost: x\r\n\r\n").await;
    let (head, body) = common::split_response(&raw);

    assert_eq!(status_line(&head), "HTTP/1.1 404 Not Found");
    assert!(body.is_empty());
}

#[tokio::test]
async fn file_route_without_directory_gets_404() {
    let addr = common::start_server(ServerConfig::default()).await;
    let raw = common::send_request(addr, b"GET /files/a.txt HTTP/1.1\r\nHost: x\r\n\r\n").await;
    let (head, body) = common::split_response(&raw);

    assert_eq!(status_line(&head), "HTTP/1.1 404 Not Found");
    assert!(!body.is_empty());
}

#[tokio::test]
async fn unsupported_file_method_gets_explanatory_404() {
    let (addr, _dir) = common::start_server_with_storage("delete").await;
    let raw = common::send_request(addr, b"DELETE /files/a.txt HTTP/1.1\r\nHost: x\r\n\r\n").await;
    let (head, body) = common::split_response(&raw);

    assert_eq!(status_line(&head), "HTTP/1.1 404 Not Found");
    assert!(!body.is_empty());
}

#[tokio::test]
async fn traversal_name_gets_404() {
    let (addr, _dir) = common::start_server_with_storage("traversal").await;
    let raw = common::send_request(
        addr,
        b"GET /files/../protocol.rs HTTP/1.1\r\nHost: x\r\n\r\n",
    )
    .await;
    let (head, _body) = common::split_response(&raw);

    assert_eq!(status_line(&head), "HTTP/1.1 404 Not Found");
}

#[tokio::test]
async fn gzip_applies_to_file_contents() {
    let (addr, _dir) = common::start_server_with_storage("gzip-file").await;

    common::send_request(
        addr,
        b"POST /files/data.bin HTTP/1.1\r\nHost: x\r\n\r\npayload bytes",
    )
    .await;

    let raw = common::send_request(
        addr,
        b"GET /files/data.bin HTTP/1.1\r\nHost: x\r\nAccept-Encoding: gzip\r\n\r\n",
    )
    .await;
    let (head, body) = common::split_response(&raw);

    assert_eq!(common::header_value(&head, "Content-Encoding"), Some("gzip"));
    let mut decoded = Vec::new();
    GzDecoder::new(body.as_slice())
        .read_to_end(&mut decoded)
        .unwrap();
    assert_eq!(decoded, b"payload bytes");
}

#[tokio::test]
async fn malformed_request_closes_without_response() {
    let addr = common::start_server(ServerConfig::default()).await;
    let raw = common::send_request(addr, b"GET /\r\n\r\n").await;
    assert!(raw.is_empty());
}
