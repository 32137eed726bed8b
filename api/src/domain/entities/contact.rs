//! Contact message domain entity
//!
//! A visitor inquiry submitted through the storefront contact form.

use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Minimum message length in characters
pub const MESSAGE_MIN_CHARS: usize = 5;

/// Maximum message length in characters
pub const MESSAGE_MAX_CHARS: usize = 2000;

/// Unique identifier for a stored contact message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContactMessageId(pub Uuid);

impl ContactMessageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ContactMessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ContactMessageId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ContactMessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted contact message
#[derive(Debug, Clone, Serialize)]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data submitted through the contact form
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NewContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl NewContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Check the submission against the form constraints.
    ///
    /// Lengths are counted in characters, not bytes.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.is_empty() {
            return Err(DomainError::Validation(
                "name: must not be empty".to_string(),
            ));
        }

        if !is_valid_email(&self.email) {
            return Err(DomainError::Validation(format!(
                "email: '{}' is not a valid email address",
                self.email
            )));
        }

        let len = self.message.chars().count();
        if len < MESSAGE_MIN_CHARS {
            return Err(DomainError::Validation(format!(
                "message: must be at least {} characters (got {})",
                MESSAGE_MIN_CHARS, len
            )));
        }
        if len > MESSAGE_MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "message: must be at most {} characters (got {})",
                MESSAGE_MAX_CHARS, len
            )));
        }

        Ok(())
    }
}

/// Syntactic email check.
///
/// Internationalized local parts and domains are accepted. The domain must
/// contain at least one dot, so bare hosts like `user@localhost` are rejected.
pub fn is_valid_email(email: &str) -> bool {
    if !EmailAddress::is_valid(email) {
        return false;
    }
    email
        .rsplit_once('@')
        .map(|(_, domain)| domain.contains('.'))
        .unwrap_or(false)
}
