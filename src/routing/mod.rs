//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Parsed Request (method, target, headers, body)
//!     → router.rs (exact match, then ordered prefix rules)
//!     → handlers.rs (produce a Response, consulting storage for /files/*)
//!     → Return: Response (not-found fallback when nothing matched)
//! ```
//!
//! # Design Decisions
//! - Route table built once at startup, immutable at runtime
//! - Exact matches win over prefix rules; first prefix match wins
//! - Every handler body passes through encoding negotiation before
//!   attachment, so all responses honor `Accept-Encoding` uniformly

pub mod handlers;
pub mod router;

pub use router::{Router, RouteTable};
