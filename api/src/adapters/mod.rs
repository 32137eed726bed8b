//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod postgres;
pub mod unavailable;

pub use postgres::{ensure_schema, PostgresContactRepository};
pub use unavailable::UnavailableContactStore;
