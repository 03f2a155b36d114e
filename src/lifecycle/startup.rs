//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Build the store and the legacy bridge
//! - Bind the listener last, once everything else is ready
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal and ends the process

use thiserror::Error;

use crate::config::ConfigError;
use crate::legacy::error::TemplateError;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The static SOAP request skeleton cannot be used.
    #[error("request template error: {0}")]
    Template(#[from] TemplateError),

    #[error("failed to build legacy HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// Bind the listener for `address`.
pub async fn bind_listener(address: &str) -> Result<tokio::net::TcpListener, StartupError> {
    tokio::net::TcpListener::bind(address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.to_string(),
            source,
        })
}
