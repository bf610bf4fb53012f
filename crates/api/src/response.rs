//! Shared response envelope for API handlers.
//!
//! Successful endpoint responses carry `"success": true` alongside their
//! payload keys at the top level. Use [`Success`] instead of ad-hoc
//! `serde_json::json!({ "success": true, ... })` to get compile-time type
//! safety and consistent serialization.

use serde::Serialize;

/// `{ "success": true, ...T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Json(Success::new(SitesResponse { total, sites }))
/// ```
#[derive(Debug, Serialize)]
pub struct Success<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Success<T> {
    pub fn new(body: T) -> Self {
        Self {
            success: true,
            body,
        }
    }
}
