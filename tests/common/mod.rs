//! Shared utilities for end-to-end protocol tests.

use std::net::SocketAddr;
use std::path::PathBuf;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use minnow::config::ServerConfig;
use minnow::http::HttpServer;
use minnow::lifecycle::Shutdown;
use minnow::net::Listener;

/// Start a server on an ephemeral port and return its address.
pub async fn start_server(mut config: ServerConfig) -> SocketAddr {
    config.listener.bind_address = "127.0.0.1:0".to_string();

    let listener = Listener::bind(&config.listener).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config);
    tokio::spawn(async move {
        server.run(listener, Shutdown::new()).await.unwrap();
    });

    addr
}

/// Start a server with a fresh scratch directory for the file routes.
#[allow(dead_code)]
pub async fn start_server_with_storage(test: &str) -> (SocketAddr, PathBuf) {
    let dir = std::env::temp_dir().join(format!("minnow-e2e-{}-{}", std::process::id(), test));
    std::fs::create_dir_all(&dir).unwrap();

    let mut config = ServerConfig::default();
    config.storage.directory = Some(dir.clone());

    (start_server(config).await, dir)
}

/// Send raw request bytes and read the whole response until the server
/// closes the connection.
pub async fn send_request(addr: SocketAddr, raw: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    stream.write_all(raw).await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    response
}

/// Split a raw response into its header section and body bytes.
pub fn split_response(raw: &[u8]) -> (String, Vec<u8>) {
    let at = raw
        .windows(4)
        .position(|window| window == b"\r\n\r\n")
        .expect("response has no header terminator");
    (
        String::from_utf8_lossy(&raw[..at]).into_owned(),
        raw[at + 4..].to_vec(),
    )
}

/// Extract a header value from a response's header section.
#[allow(dead_code)]
pub fn header_value<'h>(head: &'h str, name: &str) -> Option<&'h str> {
    head.lines().skip(1).find_map(|line| {
        let (candidate, value) = line.split_once(':')?;
        (candidate == name).then(|| value.trim())
    })
}
