//! Best-effort content-type inference.
//!
//! # Responsibilities
//! - Recognize common binary formats by their magic bytes
//! - Classify decodable text with cheap shape heuristics
//!
//! # Design Decisions
//! - First match wins: length guard, magic bytes, UTF-8 decode, text shapes
//! - Heuristic only, never authoritative: response construction consults
//!   this solely when no `Content-Type` was set by the handler

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref JSON_SHAPE: Regex = Regex::new(r"^\s*(\{.*\}|\[.*\])\s*$").unwrap();
    static ref XML_SHAPE: Regex = Regex::new(r"^\s*<\?xml|<\w+>.*</\w+>\s*$").unwrap();
}

/// Known magic-byte signatures, checked in order.
const SIGNATURES: [(&[u8], &str); 6] = [
    (&[0x1f, 0x8b], "application/gzip"),
    (&[0x50, 0x4b], "application/zip"),
    (&[0xff, 0xd8], "image/jpeg"),
    (&[0x89, 0x50], "image/png"),
    (&[0x25, 0x50], "application/pdf"),
    (&[0x47, 0x49, 0x46], "image/gif"),
];

/// Guess a MIME type for a response body.
pub fn content_type(content: &[u8]) -> &'static str {
    if content.len() < 4 {
        return "application/octet-stream";
    }

    for (signature, mime) in SIGNATURES {
        if content.starts_with(signature) {
            return mime;
        }
    }

    match std::str::from_utf8(content) {
        Ok(text) => text_content_type(text),
        Err(_) => "application/octet-stream",
    }
}

fn text_content_type(text: &str) -> &'static str {
    let trimmed = text.trim();

    if JSON_SHAPE.is_match(trimmed) {
        "application/json"
    } else if XML_SHAPE.is_match(trimmed) {
        "application/xml"
    } else if text.to_lowercase().contains("<html>") {
        "text/html"
    } else if text.contains(',') && text.split('\n').count() > 1 {
        "text/csv"
    } else if text.trim_start().starts_with("function") || text.contains("console.log") {
        "application/javascript"
    } else {
        "text/plain"
    }
}
