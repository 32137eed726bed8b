//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::{ContactMessage, NewContactMessage};
use crate::error::DomainError;

/// Repository for contact messages.
///
/// Messages are write-only from the storefront's point of view.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist a new contact message, stamping its id and timestamps
    async fn create(&self, message: &NewContactMessage) -> Result<ContactMessage, DomainError>;
}
