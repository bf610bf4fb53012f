//! Handlers for the heritage site catalog.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use heritageguard_core::catalog::HeritageSite;
use serde::Serialize;

use crate::response::Success;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SitesResponse<'a> {
    pub total: usize,
    pub sites: &'a [HeritageSite],
}

/// GET /api/heritage-sites
pub async fn list_sites(State(state): State<AppState>) -> Response {
    let sites = state.catalog.list_sites();
    Json(Success::new(SitesResponse {
        total: sites.len(),
        sites,
    }))
    .into_response()
}
