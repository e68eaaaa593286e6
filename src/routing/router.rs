//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the compiled route table
//! - Resolve a request target to a handler
//! - Dispatch the request and return the handler's response

use std::collections::HashMap;

use crate::http::encoding::EncodingDecision;
use crate::http::{Request, Response};
use crate::routing::handlers;
use crate::storage::FileStore;

/// The handlers a route can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    Welcome,
    UserAgent,
    Echo,
    Files,
}

/// Immutable mapping from request targets to handlers.
///
/// Exact targets are consulted first, then an ordered list of prefix
/// rules. No match resolves to `None` and the dispatcher falls back to
/// a not-found response.
#[derive(Debug)]
pub struct RouteTable {
    exact: HashMap<String, Handler>,
    prefixes: Vec<(String, Handler)>,
}

impl RouteTable {
    /// The server's standard routes.
    pub fn standard() -> Self {
        let mut exact = HashMap::new();
        exact.insert("/".to_string(), Handler::Welcome);
        exact.insert("/user-agent".to_string(), Handler::UserAgent);

        let prefixes = vec![
            ("/echo/".to_string(), Handler::Echo),
            ("/files/".to_string(), Handler::Files),
        ];

        Self { exact, prefixes }
    }

    /// Resolve a target to a handler and the remainder after the
    /// matched prefix (empty for exact matches).
    pub fn resolve<'t>(&self, target: &'t str) -> Option<(Handler, &'t str)> {
        if let Some(handler) = self.exact.get(target) {
            return Some((*handler, ""));
        }

        for (prefix, handler) in &self.prefixes {
            if let Some(rest) = target.strip_prefix(prefix.as_str()) {
                return Some((*handler, rest));
            }
        }

        None
    }
}

/// Dispatches parsed requests to handlers.
pub struct Router {
    table: RouteTable,
    store: FileStore,
}

impl Router {
    pub fn new(table: RouteTable, store: FileStore) -> Self {
        Self { table, store }
    }

    /// Produce a response for the request. Always succeeds: routing
    /// misses become well-formed not-found responses.
    pub async fn dispatch(&self, request: &Request) -> Response {
        let decision = EncodingDecision::negotiate(&request.headers);

        match self.table.resolve(&request.target) {
            Some((Handler::Welcome, _)) => handlers::welcome(request, decision),
            Some((Handler::UserAgent, _)) => handlers::user_agent(request, decision),
            Some((Handler::Echo, value)) => handlers::echo(request, value, decision),
            Some((Handler::Files, name)) => {
                handlers::files(request, name, &self.store, decision).await
            }
            None => handlers::not_found(request, decision),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_wins() {
        let table = RouteTable::standard();
        assert_eq!(table.resolve("/"), Some((Handler::Welcome, "")));
        assert_eq!(table.resolve("/user-agent"), Some((Handler::UserAgent, "")));
    }

    #[test]
    fn prefix_match_yields_remainder() {
        let table = RouteTable::standard();
        assert_eq!(table.resolve("/echo/abc"), Some((Handler::Echo, "abc")));
        assert_eq!(
            table.resolve("/files/note.txt"),
            Some((Handler::Files, "note.txt"))
        );
    }

    #[test]
    fn unmatched_target_resolves_to_none() {
        let table = RouteTable::standard();
        assert_eq!(table.resolve("/nope"), None);
        assert_eq!(table.resolve("/user-agent/extra"), None);
    }
}
