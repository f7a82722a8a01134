pub mod health;
pub mod metrics;
pub mod providers;
pub mod seed;

pub use health::{health_check, readiness_check};
pub use metrics::metrics_endpoint;
pub use providers::{create_provider, delete_provider, get_provider, list_providers};
pub use seed::seed_database;
