//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Validate → Bind listener → Accept traffic
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain connections → Exit
//!
//! Signals (signals.rs):
//!     Ctrl-C → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - In-flight connection handlers run to completion; drain has a
//!   deadline rather than force-cancelling tasks

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
