//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod contact;
pub mod diagnostics;
pub mod products;
pub mod root;

pub use contact::submit_contact;
pub use diagnostics::store_status;
pub use products::{get_product, list_products};
pub use root::{health, root};
