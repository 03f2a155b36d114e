//! Personnes gateway library.
//!
//! REST API over an in-memory person store, plus a bridge that relays
//! country lookups to a legacy SOAP service and answers in JSON.

pub mod config;
pub mod http;
pub mod legacy;
pub mod lifecycle;
pub mod observability;
pub mod store;

pub use config::schema::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
