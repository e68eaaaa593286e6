//! Route handlers.
//!
//! # Responsibilities
//! - Produce a structured response per route
//! - Map storage failures to deterministic status codes
//!
//! # Design Decisions
//! - Handlers never fail: every outcome is a well-formed response
//! - Routing misses and unsupported methods carry an explanatory body;
//!   a missing file on GET returns an empty 404 body

use crate::http::encoding::EncodingDecision;
use crate::http::{Request, Response, StatusCode};
use crate::storage::{FileStore, StorageError};

const WELCOME_BODY: &str = "Welcome to the HTTP Server!";

/// `/` — fixed welcome message.
pub fn welcome(request: &Request, decision: EncodingDecision) -> Response {
    Response::builder(&request.version, StatusCode::Ok)
        .body(WELCOME_BODY.as_bytes(), decision)
        .build()
}

/// `/user-agent` — echo the `User-Agent` header, empty when absent.
pub fn user_agent(request: &Request, decision: EncodingDecision) -> Response {
    let agent = request.header("User-Agent").unwrap_or_default();
    Response::builder(&request.version, StatusCode::Ok)
        .body(agent.as_bytes(), decision)
        .build()
}

/// `/echo/<value>` — return the literal value.
pub fn echo(request: &Request, value: &str, decision: EncodingDecision) -> Response {
    Response::builder(&request.version, StatusCode::Ok)
        .body(value.as_bytes(), decision)
        .build()
}

/// Fallback for unmatched targets.
pub fn not_found(request: &Request, decision: EncodingDecision) -> Response {
    let explanation = format!("Resource {} not found", request.target);
    Response::builder(&request.version, StatusCode::NotFound)
        .body(explanation.as_bytes(), decision)
        .build()
}

/// `/files/<name>` — read or write under the configured directory.
pub async fn files(
    request: &Request,
    name: &str,
    store: &FileStore,
    decision: EncodingDecision,
) -> Response {
    match request.method.as_str() {
        "GET" => read_file(request, name, store, decision).await,
        "POST" => write_file(request, name, store, decision).await,
        other => {
            let explanation = format!("Method {} is not supported for file routes", other);
            Response::builder(&request.version, StatusCode::NotFound)
                .body(explanation.as_bytes(), decision)
                .build()
        }
    }
}

async fn read_file(
    request: &Request,
    name: &str,
    store: &FileStore,
    decision: EncodingDecision,
) -> Response {
    match store.read(name).await {
        Ok(contents) => Response::builder(&request.version, StatusCode::Ok)
            .header("Content-Type", "application/octet-stream")
            .body(&contents, decision)
            .build(),
        Err(error) => file_error_response(request, name, error, decision, false),
    }
}

async fn write_file(
    request: &Request,
    name: &str,
    store: &FileStore,
    decision: EncodingDecision,
) -> Response {
    let contents = request.body.as_deref().unwrap_or_default();
    match store.write(name, contents.as_bytes()).await {
        Ok(()) => Response::builder(&request.version, StatusCode::Created).build(),
        Err(error) => file_error_response(request, name, error, decision, true),
    }
}

/// Map a storage failure to a response. GET keeps the 404 body empty
/// for missing files; POST explains every failure.
fn file_error_response(
    request: &Request,
    name: &str,
    error: StorageError,
    decision: EncodingDecision,
    explain_missing: bool,
) -> Response {
    match error {
        StorageError::NotConfigured | StorageError::MissingBaseDir(_) => {
            tracing::debug!(file = %name, error = %error, "File route unavailable");
            Response::builder(&request.version, StatusCode::NotFound)
                .body(b"File storage is not configured", decision)
                .build()
        }
        StorageError::NotFound | StorageError::InvalidName => {
            let builder = Response::builder(&request.version, StatusCode::NotFound);
            if explain_missing {
                let explanation = format!("File {} not found", name);
                builder.body(explanation.as_bytes(), decision).build()
            } else {
                builder.build()
            }
        }
        StorageError::Io(error) => {
            tracing::warn!(file = %name, error = %error, "File operation failed");
            Response::builder(&request.version, StatusCode::InternalServerError).build()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FileStore;
    use std::collections::HashMap;

    fn request(method: &str, target: &str, headers: &[(&str, &str)]) -> Request {
        Request {
            method: method.to_string(),
            target: target.to_string(),
            version: "HTTP/1.1".to_string(),
            headers: headers
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect::<HashMap<_, _>>(),
            body: None,
        }
    }

    #[test]
    fn welcome_has_fixed_body() {
        let response = welcome(&request("GET", "/", &[]), EncodingDecision::None);
        assert_eq!(response.status(), StatusCode::Ok);
        assert_eq!(response.body(), Some(WELCOME_BODY.as_bytes()));
        assert_eq!(
            response.header("Content-Length"),
            Some(WELCOME_BODY.len().to_string().as_str())
        );
    }

    #[test]
    fn user_agent_echoes_header() {
        let req = request("GET", "/user-agent", &[("User-Agent", "test-client/1.0")]);
        let response = user_agent(&req, EncodingDecision::None);
        assert_eq!(response.body(), Some(&b"test-client/1.0"[..]));
    }

    #[test]
    fn user_agent_missing_header_is_empty() {
        let response = user_agent(&request("GET", "/user-agent", &[]), EncodingDecision::None);
        assert!(response.body().is_none());
    }

    #[test]
    fn echo_returns_value() {
        let response = echo(&request("GET", "/echo/abc", &[]), "abc", EncodingDecision::None);
        assert_eq!(response.body(), Some(&b"abc"[..]));
        assert_eq!(response.header("Content-Type"), Some("text/plain"));
    }

    #[test]
    fn not_found_has_explanatory_body() {
        let response = not_found(&request("GET", "/nope", &[]), EncodingDecision::None);
        assert_eq!(response.status(), StatusCode::NotFound);
        assert!(!response.body().unwrap().is_empty());
    }

    #[tokio::test]
    async fn files_without_directory_explains() {
        let store = FileStore::new(None);
        let req = request("GET", "/files/a.txt", &[]);
        let response = files(&req, "a.txt", &store, EncodingDecision::None).await;
        assert_eq!(response.status(), StatusCode::NotFound);
        assert!(!response.body().unwrap().is_empty());
    }

    #[tokio::test]
    async fn files_rejects_other_methods() {
        let store = FileStore::new(None);
        let req = request("DELETE", "/files/a.txt", &[]);
        let response = files(&req, "a.txt", &store, EncodingDecision::None).await;
        assert_eq!(response.status(), StatusCode::NotFound);
        assert!(!response.body().unwrap().is_empty());
    }
}
