use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub mongodb: MongoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MongoConfig {
    pub uri: String,
    pub database: String,
}

impl ProviderConfig {
    pub fn load() -> Result<Self, AppError> {
        // Common config handles .env and the APP__ prefix
        let common = core_config::Config::load()?;
        let is_prod = core_config::is_prod();

        Ok(ProviderConfig {
            common,
            mongodb: MongoConfig {
                uri: core_config::get_env(
                    "MONGODB_URI",
                    Some("mongodb://localhost:27017"),
                    is_prod,
                )?,
                database: core_config::get_env("MONGODB_DATABASE", Some("insureconnect"), is_prod)?,
            },
        })
    }
}
