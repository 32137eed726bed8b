//! Domain entities
//!
//! Pure domain models for the storefront.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod contact;
pub mod diagnostics;
pub mod product;

pub use contact::{ContactMessage, ContactMessageId, NewContactMessage};
pub use diagnostics::StoreStatus;
pub use product::{Product, ProductFilter, CATALOG};
