pub mod database;
pub mod metrics;
pub mod seed;

pub use database::ProviderDb;
pub use metrics::{get_metrics, init_metrics};
pub use seed::sample_providers;
