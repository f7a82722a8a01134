pub mod providers;

pub use providers::{CreateProviderRequest, ListProvidersParams, PriceRange, ProviderResponse};
