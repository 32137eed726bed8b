//! Store connectivity port

use async_trait::async_trait;

use crate::error::DomainError;

/// Read-only view of the backing store's health
#[async_trait]
pub trait StoreProbe: Send + Sync {
    /// Whether a store connection was established at startup
    fn is_connected(&self) -> bool;

    /// Names of the collections (tables) visible in the store
    async fn list_collections(&self) -> Result<Vec<String>, DomainError>;
}
