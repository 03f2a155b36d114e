//! Legacy SOAP integration.
//!
//! # Data Flow
//! ```text
//! GET /country/{name}
//!     → template.rs (static skeleton + escaped name)
//!     → client.rs (synchronous POST, full body buffered)
//!     → envelope.rs (nested envelope → flat Country)
//!     → bridge.rs (BridgeOutcome handed back to the HTTP layer)
//! ```

pub mod bridge;
pub mod client;
pub mod envelope;
pub mod error;
pub mod template;

pub use bridge::{BridgeOutcome, CountryBridge};
pub use client::LegacyClient;
pub use envelope::Country;
pub use error::{BridgeError, TemplateError};
pub use template::RequestTemplate;
