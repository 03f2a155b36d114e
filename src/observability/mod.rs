//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and the legacy bridge produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stdout (fmt layer)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every HTTP span
//! - Degraded bridge outcomes are counted even when the caller sees 200

pub mod logging;
pub mod metrics;
