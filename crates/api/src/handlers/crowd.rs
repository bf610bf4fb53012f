//! Handler for simulated crowd forecasting.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use heritageguard_core::catalog::{HeritageSite, DEFAULT_SITE_ID};
use heritageguard_core::crowd::{self, CrowdPrediction, HourlyCrowd};
use heritageguard_core::latency;
use heritageguard_core::types::{Echoed, SiteId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};

use crate::extract::{echoed, JsonBody};
use crate::response::Success;
use crate::state::AppState;

/// Body of `POST /api/predict-crowd`.
#[derive(Debug, Default, Deserialize)]
pub struct PredictCrowdRequest {
    /// Site to forecast. Values that are not whole numbers are treated as
    /// unknown ids and resolve to the first site.
    #[serde(default, deserialize_with = "lenient_site_id")]
    pub site_id: Option<SiteId>,
    /// Forecast date, echoed back as sent. Defaults to today (`YYYY-MM-DD`, UTC).
    #[serde(default, deserialize_with = "echoed")]
    pub date: Option<Echoed>,
}

fn lenient_site_id<'de, D>(deserializer: D) -> Result<Option<SiteId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0)
            .map(|f| f as SiteId)
    }))
}

#[derive(Debug, Serialize)]
pub struct PredictCrowdResponse {
    pub site: HeritageSite,
    pub date: Echoed,
    pub prediction: CrowdPrediction,
    pub hourly_forecast: Vec<HourlyCrowd>,
    pub timestamp: Timestamp,
}

/// POST /api/predict-crowd
///
/// Never fails on input: unknown sites fall back to the first catalog entry.
pub async fn predict_crowd(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<PredictCrowdRequest>,
) -> Json<Success<PredictCrowdResponse>> {
    state.latency.pause(latency::CROWD_PREDICTION).await;

    let mut rng = state.random.rng();
    let site = state
        .catalog
        .get_site(body.site_id.unwrap_or(DEFAULT_SITE_ID))
        .clone();
    let date = body
        .date
        .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string().into());

    let prediction = crowd::predict(&mut rng);
    let hourly_forecast = crowd::hourly_forecast(&mut rng);

    tracing::debug!(
        requested_site = ?body.site_id,
        site_id = site.id,
        crowd_level = ?prediction.crowd_level,
        estimated_visitors = prediction.estimated_visitors,
        "Crowd prediction generated",
    );

    Json(Success::new(PredictCrowdResponse {
        site,
        date,
        prediction,
        hourly_forecast,
        timestamp: Utc::now(),
    }))
}
