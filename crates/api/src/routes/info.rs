//! Root service description.

use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::routes::health::API_VERSION;
use crate::state::AppState;

/// Public endpoints advertised at `/`, in documentation order.
pub const ENDPOINTS: [&str; 6] = [
    "/api/predict-crowd",
    "/api/restore-image",
    "/api/check-authenticity",
    "/api/dashboard-summary",
    "/api/heritage-sites",
    "/api/health",
];

#[derive(Serialize)]
pub struct InfoResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub description: &'static str,
    pub endpoints: &'static [&'static str],
}

/// GET /
async fn index() -> Json<InfoResponse> {
    Json(InfoResponse {
        message: "HeritageGuard API",
        version: API_VERSION,
        description: "AI-powered cultural heritage preservation and sustainable tourism",
        endpoints: &ENDPOINTS,
    })
}

/// Mount the root info route (at the top level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
