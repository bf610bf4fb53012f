//! Permissive JSON body extractor for the POST endpoints.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use heritageguard_core::types::Echoed;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::error::AppError;

/// JSON request body that tolerates an absent payload.
///
/// Every field of the POST endpoints is optional, so an empty (or
/// whitespace-only) body without a JSON `Content-Type` deserializes to
/// `T::default()`. A body declared as JSON must parse: an empty one, or one
/// that is not valid JSON for `T`, is rejected with `400 Bad Request`.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let declared_json = is_json_content_type(req.headers());

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        if !declared_json && bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))
    }
}

/// `application/json` or any `+json` media type, parameters ignored.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| mime.trim().to_ascii_lowercase())
        .is_some_and(|mime| mime == "application/json" || mime.ends_with("+json"))
}

/// Deserialize a field that is echoed back verbatim.
///
/// Use with `#[serde(default, deserialize_with = "echoed")]` on an
/// `Option<Echoed>`: a missing key stays `None` (caller substitutes the
/// default) while any present value, `null` included, becomes `Some`.
pub fn echoed<'de, D>(deserializer: D) -> Result<Option<Echoed>, D::Error>
where
    D: Deserializer<'de>,
{
    Echoed::deserialize(deserializer).map(Some)
}
