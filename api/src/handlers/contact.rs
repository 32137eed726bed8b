//! Contact handlers
//!
//! Contact form intake. Responds with success whether or not the
//! message reached the store.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::app::SubmitOutcome;
use crate::domain::entities::NewContactMessage;
use crate::error::AppError;
use crate::AppState;

/// Request body for a contact form submission
#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<ContactRequest> for NewContactMessage {
    fn from(request: ContactRequest) -> Self {
        NewContactMessage::new(request.name, request.email, request.message)
    }
}

/// Response body for a contact form submission
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub stored: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<SubmitOutcome> for ContactResponse {
    fn from(outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Stored { id } => ContactResponse {
                success: true,
                stored: true,
                id: Some(id.to_string()),
                note: None,
                error: None,
            },
            SubmitOutcome::NotStored { note, error } => ContactResponse {
                success: true,
                stored: false,
                id: None,
                note: Some(note.to_string()),
                error: Some(error),
            },
        }
    }
}

/// POST /api/contact
///
/// Accept a contact form submission and store it if the database is available.
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let outcome = state.contact_service.submit(request.into()).await?;

    Ok(Json(outcome.into()))
}
