//! Handler for simulated image restoration.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use heritageguard_core::latency;
use heritageguard_core::restoration::{
    self, BeforeAfterMetrics, Restoration, DEFAULT_DAMAGE_TYPE, DEFAULT_IMAGE_NAME,
};
use heritageguard_core::types::{Echoed, Timestamp};
use serde::{Deserialize, Serialize};

use crate::extract::{echoed, JsonBody};
use crate::response::Success;
use crate::state::AppState;

/// Body of `POST /api/restore-image`.
///
/// Both fields are echoed back as sent, whatever their JSON type.
#[derive(Debug, Default, Deserialize)]
pub struct RestoreImageRequest {
    #[serde(default, deserialize_with = "echoed")]
    pub image_name: Option<Echoed>,
    #[serde(default, deserialize_with = "echoed")]
    pub damage_type: Option<Echoed>,
}

#[derive(Debug, Serialize)]
pub struct RestoreImageResponse {
    pub image_name: Echoed,
    pub restoration: Restoration,
    pub before_after_metrics: BeforeAfterMetrics,
    pub timestamp: Timestamp,
}

/// POST /api/restore-image
///
/// Unrecognized damage types, including non-string values and `null`, get a
/// generic restoration description.
pub async fn restore_image(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<RestoreImageRequest>,
) -> Json<Success<RestoreImageResponse>> {
    state.latency.pause(latency::IMAGE_RESTORATION).await;

    let image_name = body.image_name.unwrap_or_else(|| DEFAULT_IMAGE_NAME.into());
    let damage_type = body
        .damage_type
        .unwrap_or_else(|| DEFAULT_DAMAGE_TYPE.into());

    let report = restoration::restore(&mut state.random.rng(), &damage_type);

    tracing::debug!(
        %image_name,
        %damage_type,
        quality_score = report.restoration.quality_score,
        "Image restoration simulated",
    );

    Json(Success::new(RestoreImageResponse {
        image_name,
        restoration: report.restoration,
        before_after_metrics: report.before_after_metrics,
        timestamp: Utc::now(),
    }))
}
