use crate::services::sample_providers;
use crate::startup::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;
use service_core::error::AppError;

/// Destructive development bootstrap: clears the collection and inserts the
/// fixed sample dataset.
#[tracing::instrument(skip(state))]
pub async fn seed_database(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let providers = sample_providers();
    let count = state.db.reset_and_seed(&providers).await?;

    tracing::info!(count, "Database seeded");

    Ok(Json(json!({
        "message": "Database seeded successfully",
        "count": count
    })))
}
