//! HTTP server: accept loop and per-connection pipeline.
//!
//! # Responsibilities
//! - Pull connections from the bounded listener
//! - Run the read → parse → route → build → write pipeline per connection
//! - Close the socket on every exit path
//! - Stop accepting on shutdown and drain in-flight handlers
//!
//! # Design Decisions
//! - Exactly one read per connection; whatever arrived in it is the
//!   whole request (no re-read loop to satisfy Content-Length)
//! - A malformed request closes the connection without a response;
//!   routing misses still get a well-formed 404
//! - Per-connection errors never terminate the accept loop

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::OwnedSemaphorePermit;

use crate::config::ServerConfig;
use crate::http::Request;
use crate::lifecycle::Shutdown;
use crate::net::{ConnectionGuard, ConnectionTracker, Listener};
use crate::routing::{RouteTable, Router};
use crate::storage::FileStore;

/// One read's worth of request bytes.
const READ_BUFFER_SIZE: usize = 8192;

/// How long shutdown waits for in-flight handlers before giving up.
const DRAIN_DEADLINE: Duration = Duration::from_secs(5);

/// The HTTP server: owns the router and drives connections through it.
pub struct HttpServer {
    router: Arc<Router>,
}

impl HttpServer {
    /// Create a server with the standard route table.
    pub fn new(config: ServerConfig) -> Self {
        let store = FileStore::new(config.storage.directory);
        let router = Router::new(RouteTable::standard(), store);
        Self {
            router: Arc::new(router),
        }
    }

    /// Accept and handle connections until shutdown is triggered.
    pub async fn run(self, listener: Listener, shutdown: Shutdown) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let tracker = ConnectionTracker::new();
        let mut shutdown_rx = shutdown.subscribe();

        loop {
            tokio::select! {
                accepted = listener.accept() => {
                    match accepted {
                        Ok((stream, peer, permit)) => {
                            let router = Arc::clone(&self.router);
                            let guard = tracker.track();
                            tokio::spawn(handle_connection(stream, peer, permit, guard, router));
                        }
                        Err(error) => {
                            tracing::warn!(error = %error, "Accept failed");
                        }
                    }
                }
                _ = shutdown_rx.recv() => {
                    tracing::info!("Stopping accept loop, draining connections");
                    break;
                }
            }
        }

        if tokio::time::timeout(DRAIN_DEADLINE, tracker.drained())
            .await
            .is_err()
        {
            tracing::warn!(
                in_flight = tracker.in_flight(),
                "Drain deadline passed with handlers still running"
            );
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// The per-connection pipeline. The stream, permit, and guard all drop
/// on return, closing the socket and releasing the connection slot.
async fn handle_connection(
    mut stream: TcpStream,
    peer: SocketAddr,
    _permit: OwnedSemaphorePermit,
    guard: ConnectionGuard,
    router: Arc<Router>,
) {
    let mut buffer = vec![0u8; READ_BUFFER_SIZE];
    let received = match stream.read(&mut buffer).await {
        Ok(0) => {
            tracing::debug!(connection_id = %guard.id(), peer_addr = %peer, "Peer closed before sending");
            return;
        }
        Ok(received) => received,
        Err(error) => {
            tracing::warn!(connection_id = %guard.id(), peer_addr = %peer, error = %error, "Read failed");
            return;
        }
    };

    let request = match Request::parse(&buffer[..received]) {
        Ok(request) => request,
        Err(error) => {
            tracing::debug!(
                connection_id = %guard.id(),
                peer_addr = %peer,
                error = %error,
                "Dropping malformed request"
            );
            return;
        }
    };

    tracing::debug!(
        connection_id = %guard.id(),
        method = %request.method,
        target = %request.target,
        "Request received"
    );

    let response = router.dispatch(&request).await;
    let status = response.status();

    if let Err(error) = stream.write_all(&response.to_bytes()).await {
        tracing::warn!(connection_id = %guard.id(), error = %error, "Write failed");
        return;
    }
    let _ = stream.shutdown().await;

    tracing::debug!(
        connection_id = %guard.id(),
        status = status.code(),
        "Response sent"
    );
}
