use axum::{routing::get, Json, Router};
use chrono::Utc;
use heritageguard_core::types::Timestamp;
use serde::Serialize;

use crate::state::AppState;

/// Reported in both the health check and the root info payload.
pub const API_VERSION: &str = "1.0.0";

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Always `healthy`; there are no dependencies to probe.
    pub status: &'static str,
    pub api_version: &'static str,
    pub timestamp: Timestamp,
}

/// GET /api/health -- liveness only.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        api_version: API_VERSION,
        timestamp: Utc::now(),
    })
}

/// Mount health check routes (under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
