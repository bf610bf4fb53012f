//! Handler for the aggregated monitoring dashboard.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use heritageguard_core::dashboard;

use crate::response::Success;
use crate::state::AppState;

/// GET /api/dashboard-summary
///
/// No simulated latency; every block except `heritage_sites` is freshly
/// randomized. The summary borrows the shared catalog, so it is serialized
/// before the state handle is released.
pub async fn dashboard_summary(State(state): State<AppState>) -> Response {
    let summary = dashboard::summarize(&mut state.random.rng(), &state.catalog, Utc::now());

    tracing::debug!(
        sites_at_risk = summary.overview.sites_at_risk,
        risk_level = ?summary.environmental_risk.level,
        alerts = summary.alerts.len(),
        "Dashboard summary generated",
    );

    Json(Success::new(summary)).into_response()
}
