//! HTTP response construction and serialization.
//!
//! # Responsibilities
//! - Accumulate version, status, headers, and optional body
//! - Inject `Content-Length`, `Content-Type`, and `Content-Encoding`
//!   when a body is attached
//! - Serialize to a byte-exact wire message
//!
//! # Design Decisions
//! - Stepwise assembly yields an immutable `Response`; body headers are
//!   derived once at attach time and never re-derived
//! - Headers serialize in insertion order, last write wins in place
//! - `Content-Type` is sniffed from the uncompressed body so a gzip
//!   wrapper never masks what the handler produced
//! - Headers set explicitly by the handler are never overwritten

use crate::http::encoding::{self, EncodingDecision};
use crate::http::sniff;

/// The closed set of status codes this server emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok,
    Created,
    NoContent,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    InternalServerError,
    NotImplemented,
}

impl StatusCode {
    /// Numeric wire code.
    pub fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::Created => 201,
            Self::NoContent => 204,
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::Forbidden => 403,
            Self::NotFound => 404,
            Self::InternalServerError => 500,
            Self::NotImplemented => 501,
        }
    }
}

/// Reason phrase for a numeric code, from a fixed lookup table.
pub fn reason_phrase(code: u16) -> &'static str {
    match code {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        _ => "Unknown Status",
    }
}

/// An assembled HTTP response, immutable once built.
#[derive(Debug)]
pub struct Response {
    version: String,
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl Response {
    /// Start assembling a response for the given protocol version.
    pub fn builder(version: &str, status: StatusCode) -> ResponseBuilder {
        ResponseBuilder {
            version: version.to_string(),
            status,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Look up a header by its exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Serialize to the wire format: status line, headers in insertion
    /// order, blank line, then the raw body bytes if any.
    pub fn to_bytes(&self) -> Vec<u8> {
        let code = self.status.code();
        let mut message =
            format!("{} {} {}\r\n", self.version, code, reason_phrase(code)).into_bytes();

        for (name, value) in &self.headers {
            message.extend_from_slice(format!("{}: {}\r\n", name, value).as_bytes());
        }
        message.extend_from_slice(b"\r\n");

        if let Some(body) = &self.body {
            message.extend_from_slice(body);
        }

        message
    }
}

/// Stepwise response assembly.
#[derive(Debug)]
pub struct ResponseBuilder {
    version: String,
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Option<Vec<u8>>,
}

impl ResponseBuilder {
    /// Set a header. A repeated name keeps its original position and
    /// takes the new value.
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_header(name, value.into());
        self
    }

    fn set_header(&mut self, name: &str, value: String) {
        match self.headers.iter_mut().find(|(candidate, _)| candidate == name) {
            Some(entry) => entry.1 = value,
            None => self.headers.push((name.to_string(), value)),
        }
    }

    fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|(candidate, _)| candidate == name)
    }

    /// Attach a body, applying the negotiated encoding.
    ///
    /// A non-empty body injects `Content-Length`, `Content-Encoding`
    /// (gzip only), and a sniffed `Content-Type` unless the handler
    /// already set one. An empty body leaves the response body-less
    /// with no body-related headers.
    pub fn body(mut self, content: &[u8], decision: EncodingDecision) -> Self {
        let payload = encoding::compress_if_needed(content, decision);
        if payload.is_empty() {
            return self;
        }

        if decision.is_gzip() {
            self.set_header("Content-Encoding", "gzip".to_string());
        }
        self.set_header("Content-Length", payload.len().to_string());
        if !self.has_header("Content-Type") {
            self.set_header("Content-Type", sniff::content_type(content).to_string());
        }

        self.body = Some(payload);
        self
    }

    /// Freeze into an immutable response.
    pub fn build(self) -> Response {
        Response {
            version: self.version,
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}
