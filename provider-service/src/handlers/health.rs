use crate::startup::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe. Constant payload, reports nothing about dependencies.
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "OK",
        "message": "InsureConnect API is running"
    }))
}

/// Readiness probe. Answers 200 only when MongoDB responds to a ping.
pub async fn readiness_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.health_check().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
