//! Minnow: a minimal HTTP/1.1 server.
//!
//! Accepts raw TCP byte streams, parses them into structured requests,
//! dispatches them to a small set of route handlers, and serializes
//! responses with correct framing, content-type inference, and optional
//! gzip content-encoding.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → net (accept loop, connection limits, lifecycle tracking)
//!     → http::server (one read per connection)
//!     → http::request (raw bytes → Request)
//!     → routing (exact match, prefix rules, not-found fallback)
//!     → storage (file reads/writes for /files/*)
//!     → http::response (Response → raw bytes, sniffing + encoding)
//!     → Write back and close
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod routing;
pub mod storage;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
