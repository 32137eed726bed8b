//! Root and health handlers

use axum::Json;
use serde::Serialize;

pub const BRAND: &str = "Urban Wheel Pottery";

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub brand: &'static str,
    pub message: &'static str,
}

/// GET /
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        brand: BRAND,
        message: "API running",
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
