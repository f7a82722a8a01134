use crate::dtos::{CreateProviderRequest, ListProvidersParams, PriceRange, ProviderResponse};
use crate::startup::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use axum_extra::extract::WithRejection;
use serde_json::json;
use service_core::error::AppError;

/// List providers, optionally filtered to an inclusive price window,
/// ascending by price.
#[tracing::instrument(skip(state))]
pub async fn list_providers(
    State(state): State<AppState>,
    Query(params): Query<ListProvidersParams>,
) -> Result<impl IntoResponse, AppError> {
    let range = PriceRange::from_params(&params)?;
    let providers = state.db.list(&range).await?;

    let body: Vec<ProviderResponse> = providers.into_iter().map(ProviderResponse::from).collect();
    Ok(Json(body))
}

#[tracing::instrument(skip(state, request))]
pub async fn create_provider(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<CreateProviderRequest>, AppError>,
) -> Result<impl IntoResponse, AppError> {
    let provider = request.into_provider()?;

    state.db.insert(&provider).await?;

    tracing::info!(provider_id = %provider.provider_id, "Provider created");

    Ok((StatusCode::CREATED, Json(ProviderResponse::from(provider))))
}

#[tracing::instrument(skip(state))]
pub async fn get_provider(
    State(state): State<AppState>,
    Path(provider_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let provider = state
        .db
        .find_by_id(&provider_id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("Provider not found")))?;

    Ok(Json(ProviderResponse::from(provider)))
}

#[tracing::instrument(skip(state))]
pub async fn delete_provider(
    State(state): State<AppState>,
    Path(provider_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = state.db.delete(&provider_id).await?;
    if !deleted {
        return Err(AppError::NotFound(anyhow::anyhow!("Provider not found")));
    }

    tracing::info!(provider_id = %provider_id, "Provider deleted");

    Ok(Json(json!({ "message": "Provider deleted successfully" })))
}
