//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (connection bound, address shape)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - A missing storage directory is deliberately NOT validated here;
//!   file routes degrade at request time instead

use std::net::SocketAddr;

use crate::config::schema::ServerConfig;

/// A single semantic validation failure.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// The bind address does not parse as host:port.
    BindAddress(String),
    /// The connection bound must admit at least one connection.
    MaxConnectionsZero,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::BindAddress(value) => {
                write!(f, "invalid bind address '{}'", value)
            }
            ValidationError::MaxConnectionsZero => {
                write!(f, "max_connections must be greater than zero")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check the semantic constraints of a configuration.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.listener.max_connections == 0 {
        errors.push(ValidationError::MaxConnectionsZero);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn bad_address_is_reported() {
        let mut config = ServerConfig::default();
        config.listener.bind_address = "nonsense".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::BindAddress("nonsense".to_string())]
        );
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = ServerConfig::default();
        config.listener.bind_address = "nonsense".to_string();
        config.listener.max_connections = 0;
        assert_eq!(validate_config(&config).unwrap_err().len(), 2);
    }
}
