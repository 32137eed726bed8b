//! PostgreSQL adapters
//!
//! Implementations of the store ports using SeaORM and PostgreSQL.

pub mod contact_repo;
pub mod schema;

pub use contact_repo::PostgresContactRepository;
pub use schema::ensure_schema;
