//! Health/status handlers.

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;

/// GET /api/ — liveness probe.
pub async fn root() -> axum::response::Response {
    (
        StatusCode::OK,
        Json(json!({
            "message": "B2B Mobile API",
            "status": "running",
        })),
    )
        .into_response()
}
