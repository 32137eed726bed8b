//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for the catalog and contact intake
//! - `ports`: Trait definitions for the contact store

pub mod entities;
pub mod ports;
