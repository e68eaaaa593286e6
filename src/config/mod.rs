//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → CLI flags override individual fields
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults, so the server runs with no config file
//! - Validation separates syntactic (serde) from semantic checks
//! - A missing storage directory is NOT a validation error: file routes
//!   degrade to 404 while the rest of the server keeps working

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{ListenerConfig, ObservabilityConfig, ServerConfig, StorageConfig};
pub use validation::{validate_config, ValidationError};
