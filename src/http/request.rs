//! HTTP request parsing.
//!
//! # Responsibilities
//! - Decode one read's worth of bytes as UTF-8 text (lossy)
//! - Split header section from body at the first blank line
//! - Parse the request line into method, target, and version
//! - Collect headers with last-write-wins semantics
//!
//! # Design Decisions
//! - Accepts both CRLF and bare LF line endings
//! - Header lines without a colon are skipped, not rejected
//! - Header names are stored and looked up case-sensitively
//! - No validation of method tokens, version strings, or target shape

use std::collections::HashMap;

use thiserror::Error;

/// Errors produced while parsing a request buffer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The buffer was empty or contained only whitespace.
    #[error("empty request")]
    Empty,

    /// The request line had fewer than three space-separated tokens.
    #[error("malformed request line")]
    RequestLine,
}

/// A parsed HTTP request.
///
/// Method, target, and version are always present after a successful
/// parse. The body is present only when a non-empty section followed
/// the blank line terminating the headers.
#[derive(Debug, Clone)]
pub struct Request {
    pub method: String,
    pub target: String,
    pub version: String,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl Request {
    /// Parse a raw request buffer as read from a client connection.
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        let text = String::from_utf8_lossy(buffer);
        if text.trim().is_empty() {
            return Err(ParseError::Empty);
        }

        let (head, body) = split_head_body(&text);

        let mut lines = head.lines().filter(|line| !line.is_empty());
        let request_line = lines.next().ok_or(ParseError::Empty)?;

        let tokens: Vec<&str> = request_line.split(' ').collect();
        if tokens.len() < 3 {
            return Err(ParseError::RequestLine);
        }

        let mut headers = HashMap::new();
        for line in lines {
            if let Some((name, value)) = line.split_once(':') {
                headers.insert(name.trim().to_string(), value.trim().to_string());
            }
        }

        let body = if body.trim().is_empty() {
            None
        } else {
            Some(body.to_string())
        };

        Ok(Self {
            method: tokens[0].to_string(),
            target: tokens[1].to_string(),
            version: tokens[2].to_string(),
            headers,
            body,
        })
    }

    /// Look up a header by its exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

/// Split the buffer at the first blank line into header material and body.
fn split_head_body(text: &str) -> (&str, &str) {
    let crlf = text.find("\r\n\r\n").map(|at| (at, 4));
    let lf = text.find("\n\n").map(|at| (at, 2));

    let split = match (crlf, lf) {
        (Some(c), Some(l)) => Some(if c.0 <= l.0 { c } else { l }),
        (Some(c), None) => Some(c),
        (None, Some(l)) => Some(l),
        (None, None) => None,
    };

    match split {
        Some((at, width)) => (&text[..at], &text[at + width..]),
        None => (text, ""),
    }
}
