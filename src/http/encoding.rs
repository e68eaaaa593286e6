//! Content-encoding negotiation and compression.
//!
//! # Responsibilities
//! - Derive one encoding decision per request from `Accept-Encoding`
//! - Gzip-compress response bodies when the client accepts it
//!
//! # Design Decisions
//! - Binary decision: gzip or nothing, no q-value weighting
//! - Substring match on the header value, case-insensitive
//! - Empty input is never compressed, whatever the decision

use std::collections::HashMap;
use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;

/// The server's per-request choice of response body encoding.
///
/// Derived once from the request headers and consumed by both the
/// compressor and the header-writing step of response construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingDecision {
    None,
    Gzip,
}

impl EncodingDecision {
    /// Inspect the request headers and decide whether to gzip.
    ///
    /// The `Accept-Encoding` name is matched exactly; an absent or blank
    /// value means no encoding.
    pub fn negotiate(headers: &HashMap<String, String>) -> Self {
        match headers.get("Accept-Encoding") {
            Some(value) if !value.trim().is_empty() && value.to_lowercase().contains("gzip") => {
                Self::Gzip
            }
            _ => Self::None,
        }
    }

    /// Whether this decision selects gzip.
    pub fn is_gzip(self) -> bool {
        self == Self::Gzip
    }
}

/// Return `content` unchanged, or gzip-compressed when the decision is
/// [`EncodingDecision::Gzip`]. Empty input always yields empty output.
pub fn compress_if_needed(content: &[u8], decision: EncodingDecision) -> Vec<u8> {
    if content.is_empty() {
        return Vec::new();
    }

    match decision {
        EncodingDecision::None => content.to_vec(),
        EncodingDecision::Gzip => {
            let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
            encoder
                .write_all(content)
                .expect("writing to an in-memory encoder cannot fail");
            encoder
                .finish()
                .expect("finishing an in-memory encoder cannot fail")
        }
    }
}
