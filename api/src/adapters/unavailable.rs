//! Store adapter used when no database is configured or reachable.
//!
//! Every write fails with `DomainError::Unavailable`; the contact flow
//! absorbs that failure and reports the message as not stored.

use async_trait::async_trait;

use crate::domain::entities::{ContactMessage, NewContactMessage};
use crate::domain::ports::{ContactRepository, StoreProbe};
use crate::error::DomainError;

pub const UNAVAILABLE_MESSAGE: &str =
    "Database not available. Check DATABASE_URL and DATABASE_NAME environment variables";

/// No-op store for running without a database
pub struct UnavailableContactStore;

#[async_trait]
impl ContactRepository for UnavailableContactStore {
    async fn create(&self, _message: &NewContactMessage) -> Result<ContactMessage, DomainError> {
        Err(DomainError::Unavailable(UNAVAILABLE_MESSAGE.to_string()))
    }
}

#[async_trait]
impl StoreProbe for UnavailableContactStore {
    fn is_connected(&self) -> bool {
        false
    }

    async fn list_collections(&self) -> Result<Vec<String>, DomainError> {
        Err(DomainError::Unavailable(UNAVAILABLE_MESSAGE.to_string()))
    }
}
