use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One insurance plan listing.
///
/// The externally assigned `provider_id` doubles as the MongoDB `_id`, so the
/// uniqueness constraint is the collection's primary key. `price` is the cost
/// per semester and the sole filterable attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    #[serde(rename = "_id")]
    pub provider_id: String,
    pub name: String,
    pub price: f64,
    pub website_link: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Provider {
    pub fn new(provider_id: String, name: String, price: f64, website_link: String) -> Self {
        let now = Utc::now();
        Self {
            provider_id,
            name,
            price,
            website_link,
            created_at: now,
            updated_at: now,
        }
    }
}
