//! Route definitions for the monitoring dashboard and site catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::{dashboard, sites};
use crate::state::AppState;

/// Dashboard routes mounted at `/api`.
///
/// ```text
/// GET  /dashboard-summary   -> dashboard_summary
/// GET  /heritage-sites      -> list_sites
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/dashboard-summary", get(dashboard::dashboard_summary))
        .route("/heritage-sites", get(sites::list_sites))
}
