//! HTTP protocol engine.
//!
//! # Data Flow
//! ```text
//! Raw bytes (one read per connection)
//!     → request.rs (parse request line, headers, optional body)
//!     → [routing layer picks a handler]
//!     → encoding.rs (negotiate Accept-Encoding, gzip the body)
//!     → response.rs (status line, headers, framing)
//!     → sniff.rs (Content-Type when the handler did not set one)
//!     → Raw bytes written back to the connection
//! ```
//!
//! # Design Decisions
//! - Requests and responses are plain owned values, built fresh per
//!   connection and discarded after the write
//! - Serialization is byte-exact: CRLF line endings, headers in
//!   insertion order, body appended with no trailing terminator
//! - No keep-alive, chunked transfer, or multi-value headers

pub mod encoding;
pub mod request;
pub mod response;
pub mod server;
pub mod sniff;

pub use request::{ParseError, Request};
pub use response::{Response, StatusCode};
pub use server::HttpServer;
