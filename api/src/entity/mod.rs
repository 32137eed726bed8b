//! SeaORM entities
//!
//! Table definitions for the PostgreSQL store.

pub mod contact_messages;
