pub mod dashboard;
pub mod health;
pub mod info;
pub mod simulation;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /predict-crowd                  crowd forecast (POST)
/// /restore-image                  image restoration (POST)
/// /check-authenticity             authenticity check (POST)
///
/// /dashboard-summary              aggregated dashboard (GET)
/// /heritage-sites                 site catalog (GET)
///
/// /health                         liveness (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(simulation::router())
        .merge(dashboard::router())
        .merge(health::router())
}
