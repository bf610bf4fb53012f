//! Handler for simulated cultural-authenticity checks.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use heritageguard_core::authenticity::{
    self, AuthenticityAnalysis, NlpMetrics, DEFAULT_CATEGORY, DEFAULT_CONTENT,
};
use heritageguard_core::latency;
use heritageguard_core::types::{Echoed, Timestamp};
use serde::{Deserialize, Serialize};

use crate::extract::{echoed, JsonBody};
use crate::response::Success;
use crate::state::AppState;

/// Body of `POST /api/check-authenticity`.
#[derive(Debug, Default, Deserialize)]
pub struct CheckAuthenticityRequest {
    pub content: Option<String>,
    /// Echoed back as sent, whatever its JSON type.
    #[serde(default, deserialize_with = "echoed")]
    pub category: Option<Echoed>,
}

#[derive(Debug, Serialize)]
pub struct CheckAuthenticityResponse {
    pub analysis: AuthenticityAnalysis,
    pub nlp_metrics: NlpMetrics,
    pub red_flags: Vec<&'static str>,
    pub recommendations: Vec<&'static str>,
    pub timestamp: Timestamp,
}

/// POST /api/check-authenticity
pub async fn check_authenticity(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<CheckAuthenticityRequest>,
) -> Json<Success<CheckAuthenticityResponse>> {
    state.latency.pause(latency::AUTHENTICITY_CHECK).await;

    let content = body.content.as_deref().unwrap_or(DEFAULT_CONTENT);
    let category = body.category.unwrap_or_else(|| DEFAULT_CATEGORY.into());

    let report = authenticity::check(&mut state.random.rng(), content, &category);

    tracing::debug!(
        %category,
        content_length = report.analysis.content_length,
        score = report.analysis.authenticity_score,
        red_flags = report.red_flags.len(),
        "Authenticity check simulated",
    );

    Json(Success::new(CheckAuthenticityResponse {
        analysis: report.analysis,
        nlp_metrics: report.nlp_metrics,
        red_flags: report.red_flags,
        recommendations: report.recommendations,
        timestamp: Utc::now(),
    }))
}
