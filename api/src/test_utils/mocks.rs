//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{ContactMessage, ContactMessageId, NewContactMessage};
use crate::domain::ports::{ContactRepository, StoreProbe};
use crate::error::DomainError;

// ============================================================================
// In-Memory Contact Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryContactRepository {
    messages: Arc<RwLock<Vec<ContactMessage>>>,
    collections: Vec<String>,
    failure: Option<String>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A connected store whose every call errors
    pub fn failing() -> Self {
        Self::failing_with("connection refused (os error 111)")
    }

    pub fn failing_with(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    /// Set the collection names reported by the probe
    pub fn with_collections(mut self, names: &[&str]) -> Self {
        self.collections = names.iter().map(|n| n.to_string()).collect();
        self
    }

    /// Snapshot of stored messages
    pub fn messages(&self) -> Vec<ContactMessage> {
        self.messages.read().unwrap().clone()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create(&self, message: &NewContactMessage) -> Result<ContactMessage, DomainError> {
        if let Some(failure) = &self.failure {
            return Err(DomainError::Database(failure.clone()));
        }

        let now = Utc::now();
        let stored = ContactMessage {
            id: ContactMessageId::new(),
            name: message.name.clone(),
            email: message.email.clone(),
            message: message.message.clone(),
            created_at: now,
            updated_at: now,
        };
        self.messages.write().unwrap().push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl StoreProbe for InMemoryContactRepository {
    fn is_connected(&self) -> bool {
        true
    }

    async fn list_collections(&self) -> Result<Vec<String>, DomainError> {
        match &self.failure {
            Some(failure) => Err(DomainError::Database(failure.clone())),
            None => Ok(self.collections.clone()),
        }
    }
}
