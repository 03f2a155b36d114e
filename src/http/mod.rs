//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → personnes.rs (CRUD over the store)
//!       country.rs   (legacy SOAP bridge)
//!     → JSON response (error.rs only in strict mode)
//! ```

pub mod country;
pub mod error;
pub mod middleware;
pub mod personnes;
pub mod request;
pub mod server;

pub use error::ApiError;
pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
