//! Store diagnostics handler

use axum::{extract::State, Json};

use crate::domain::entities::StoreStatus;
use crate::AppState;

/// GET /test
///
/// Report store connectivity. Always responds 200.
pub async fn store_status(State(state): State<AppState>) -> Json<StoreStatus> {
    Json(state.diagnostics_service.status().await)
}
