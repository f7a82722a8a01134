use crate::models::Provider;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;

#[derive(Debug, Serialize)]
pub struct ProviderResponse {
    pub provider_id: String,
    pub name: String,
    pub price: f64,
    pub website_link: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

impl From<Provider> for ProviderResponse {
    fn from(provider: Provider) -> Self {
        Self {
            provider_id: provider.provider_id,
            name: provider.name,
            price: provider.price,
            website_link: provider.website_link,
            created_at: provider.created_at.to_rfc3339(),
            updated_at: provider.updated_at.to_rfc3339(),
        }
    }
}

/// Body of `POST /providers`.
///
/// Every field is optional at the serde level so that missing fields surface
/// as our own validation error rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateProviderRequest {
    pub provider_id: Option<String>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub website_link: Option<String>,
}

impl CreateProviderRequest {
    /// Validate the request and turn it into a fresh `Provider` record.
    pub fn into_provider(self) -> Result<Provider, AppError> {
        let provider_id = require_field(self.provider_id)?;
        let name = require_field(self.name)?;
        let website_link = require_field(self.website_link)?;
        let price = self
            .price
            .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("All fields are required")))?;

        if price < 0.0 {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "Price must be a positive number"
            )));
        }

        Ok(Provider::new(provider_id, name, price, website_link))
    }
}

fn require_field(value: Option<String>) -> Result<String, AppError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("All fields are required")))
}

/// Query string of `GET /providers`.
#[derive(Debug, Deserialize)]
pub struct ListProvidersParams {
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
}

/// Validated price window, inclusive on both ends.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    /// Parse and validate the raw query parameters before any query runs.
    ///
    /// Blank bounds count as absent. A present bound must parse as a finite
    /// number; with both bounds present the window must not be inverted.
    pub fn from_params(params: &ListProvidersParams) -> Result<Self, AppError> {
        let min = parse_bound(params.min_price.as_deref(), "minimum")?;
        let max = parse_bound(params.max_price.as_deref(), "maximum")?;

        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(AppError::BadRequest(anyhow::anyhow!(
                    "Minimum price cannot be greater than maximum price"
                )));
            }
        }

        Ok(Self { min, max })
    }
}

fn parse_bound(raw: Option<&str>, which: &str) -> Result<Option<f64>, AppError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(AppError::BadRequest(anyhow::anyhow!(
            "Invalid {} price",
            which
        ))),
    }
}
