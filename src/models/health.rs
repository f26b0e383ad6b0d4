use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Liveness payload returned by `GET /health`.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "service": "email-list-checker",
///   "version": "0.1.0",
///   "timestamp": "2024-03-10T15:30:45.123456789Z"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn up() -> Self {
        Self {
            status: "UP".to_string(),
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
