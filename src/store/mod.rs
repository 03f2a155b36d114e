//! In-memory record store.
//!
//! # Data Flow
//! ```text
//! startup
//!     → seed.rs (optional demo records)
//!     → records.rs (PersonStore, shared by handle)
//!     → CRUD handlers read/append/remove under an async RwLock
//! ```
//!
//! # Design Decisions
//! - Volatile: nothing survives a restart
//! - Order is insertion order; identifiers may repeat
//! - Mutations return the post-mutation snapshot taken under the same guard

pub mod person;
pub mod records;
pub mod seed;

pub use person::{Address, Person, PersonBody};
pub use records::PersonStore;
