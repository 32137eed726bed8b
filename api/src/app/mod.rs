//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod catalog_service;
pub mod contact_service;
pub mod diagnostics_service;

pub use catalog_service::CatalogService;
pub use contact_service::{ContactService, SubmitOutcome};
pub use diagnostics_service::DiagnosticsService;
