//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → handed to HttpServer at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults so running without a file reproduces
//!   the fixed port and endpoint of the legacy deployment
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::ApiConfig;
pub use schema::GatewayConfig;
pub use schema::LegacyConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::StoreConfig;
