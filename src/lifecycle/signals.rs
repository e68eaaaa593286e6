//! OS signal handling.
//!
//! # Responsibilities
//! - Translate Ctrl-C into the internal shutdown signal

use crate::lifecycle::Shutdown;

/// Wait for Ctrl-C, then trigger shutdown.
pub async fn forward_ctrl_c(shutdown: Shutdown) {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %error, "Failed to install Ctrl+C handler");
        return;
    }
    tracing::info!("Shutdown signal received");
    shutdown.trigger();
}
