//! Route definitions for the simulated AI endpoints.

use axum::routing::post;
use axum::Router;

use crate::handlers::{authenticity, crowd, restoration};
use crate::state::AppState;

/// Simulated inference routes mounted at `/api`.
///
/// ```text
/// POST /predict-crowd        -> predict_crowd
/// POST /restore-image        -> restore_image
/// POST /check-authenticity   -> check_authenticity
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/predict-crowd", post(crowd::predict_crowd))
        .route("/restore-image", post(restoration::restore_image))
        .route("/check-authenticity", post(authenticity::check_authenticity))
}
