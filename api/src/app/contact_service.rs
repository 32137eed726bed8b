//! Contact service
//!
//! Validates contact form submissions and stores them on a best-effort
//! basis. A store failure never fails the submission.

use std::sync::Arc;

use crate::domain::entities::{ContactMessageId, NewContactMessage};
use crate::domain::ports::ContactRepository;
use crate::error::{truncate_chars, DomainError};

/// Note attached to submissions that could not be persisted
pub const NOT_STORED_NOTE: &str = "Saved without DB";

/// Maximum length of the store error echoed back to the caller
pub const MAX_ERROR_CHARS: usize = 120;

/// Result of a submission that passed validation
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Stored {
        id: ContactMessageId,
    },
    NotStored {
        note: &'static str,
        error: String,
    },
}

impl SubmitOutcome {
    pub fn is_stored(&self) -> bool {
        matches!(self, SubmitOutcome::Stored { .. })
    }
}

/// Service for contact form intake
pub struct ContactService<R>
where
    R: ContactRepository + ?Sized,
{
    contacts: Arc<R>,
}

impl<R> ContactService<R>
where
    R: ContactRepository + ?Sized,
{
    pub fn new(contacts: Arc<R>) -> Self {
        Self { contacts }
    }

    /// Validate and store a submission.
    ///
    /// Only validation errors are returned; the store write is a single
    /// attempt whose failure is folded into `SubmitOutcome::NotStored`.
    pub async fn submit(&self, message: NewContactMessage) -> Result<SubmitOutcome, DomainError> {
        message.validate()?;

        match self.contacts.create(&message).await {
            Ok(stored) => {
                tracing::info!(id = %stored.id, "Stored contact message");
                Ok(SubmitOutcome::Stored { id: stored.id })
            }
            Err(e) => {
                tracing::warn!(error = %e, "Contact message not stored");
                Ok(SubmitOutcome::NotStored {
                    note: NOT_STORED_NOTE,
                    error: truncate_chars(&e.to_string(), MAX_ERROR_CHARS),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::UnavailableContactStore;
    use crate::test_utils::{valid_contact, InMemoryContactRepository};

    #[tokio::test]
    async fn stores_valid_message() {
        let repo = Arc::new(InMemoryContactRepository::new());
        let service = ContactService::new(repo.clone());

        let outcome = service.submit(valid_contact()).await.unwrap();

        let id = match outcome {
            SubmitOutcome::Stored { id } => id,
            other => panic!("expected stored outcome, got {:?}", other),
        };
        let stored = repo.messages();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, id);
        assert_eq!(stored[0].email, valid_contact().email);
    }

    #[tokio::test]
    async fn five_character_message_is_accepted() {
        let repo = Arc::new(InMemoryContactRepository::new());
        let service = ContactService::new(repo);

        let msg = NewContactMessage::new("Ada", "ada@example.com", "Hello");
        assert!(service.submit(msg).await.unwrap().is_stored());
    }

    #[tokio::test]
    async fn store_failure_is_swallowed() {
        let repo = Arc::new(InMemoryContactRepository::failing());
        let service = ContactService::new(repo.clone());

        let outcome = service.submit(valid_contact()).await.unwrap();

        match outcome {
            SubmitOutcome::NotStored { note, error } => {
                assert_eq!(note, NOT_STORED_NOTE);
                assert!(error.contains("connection refused"));
            }
            other => panic!("expected not stored, got {:?}", other),
        }
        assert!(repo.messages().is_empty());
    }

    #[tokio::test]
    async fn missing_store_is_swallowed() {
        let service = ContactService::new(Arc::new(UnavailableContactStore));

        let outcome = service.submit(valid_contact()).await.unwrap();
        assert!(!outcome.is_stored());
    }

    #[tokio::test]
    async fn store_error_is_truncated() {
        let long_error = "x".repeat(500);
        let repo = Arc::new(InMemoryContactRepository::failing_with(&long_error));
        let service = ContactService::new(repo);

        match service.submit(valid_contact()).await.unwrap() {
            SubmitOutcome::NotStored { error, .. } => {
                assert_eq!(error.chars().count(), MAX_ERROR_CHARS)
            }
            other => panic!("expected not stored, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn short_message_fails_validation_without_writing() {
        let repo = Arc::new(InMemoryContactRepository::new());
        let service = ContactService::new(repo.clone());

        let msg = NewContactMessage::new("Ada", "ada@example.com", "Hiya");
        let result = service.submit(msg).await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert!(repo.messages().is_empty());
    }

    #[tokio::test]
    async fn works_behind_trait_object() {
        let repo: Arc<dyn ContactRepository> = Arc::new(InMemoryContactRepository::new());
        let service: ContactService<dyn ContactRepository> = ContactService::new(repo);

        assert!(service.submit(valid_contact()).await.unwrap().is_stored());
    }
}
