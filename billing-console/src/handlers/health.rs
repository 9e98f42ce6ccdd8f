use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Health check endpoint for liveness probes. This service keeps no
/// state of its own, so being up is being healthy.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "billing-console",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}
