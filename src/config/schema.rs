//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files, and
//! every section falls back to defaults so an empty file is a valid config.

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Legacy SOAP service the country bridge talks to.
    pub legacy: LegacyConfig,

    /// Behaviour of the REST surface.
    pub api: ApiConfig,

    /// Initial contents of the record store.
    pub store: StoreConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:12345").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:12345".to_string(),
        }
    }
}

/// Legacy SOAP endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LegacyConfig {
    /// Full URL the rendered envelope is POSTed to.
    pub endpoint_url: String,

    /// Total timeout for one round trip. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
}

impl Default for LegacyConfig {
    fn default() -> Self {
        Self {
            endpoint_url: "http://localhost:8080/ws".to_string(),
            timeout_secs: None,
        }
    }
}

/// REST surface configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Reject undecodable bodies (422) and failed bridge calls (502)
    /// instead of answering 200 with empty values.
    pub strict_mode: bool,
}

/// Record store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Start with the seven demo records.
    pub seed_demo_records: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_demo_records: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
