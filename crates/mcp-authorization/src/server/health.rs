//! Health check and root endpoints.

use axum::{Json, response::IntoResponse};

use crate::mcp::GREETING;

/// `GET /health`
///
/// Always reports ok: the server has no dependencies to probe.
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

/// `GET /`
///
/// Greeting that proves the process is serving.
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "message": GREETING }))
}
