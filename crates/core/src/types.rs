/// Heritage site identifiers as they appear in request bodies.
pub type SiteId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A request field returned to the client exactly as it was sent.
pub type Echoed = serde_json::Value;
