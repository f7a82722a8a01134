use crate::dtos::PriceRange;
use crate::models::Provider;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::{FindOptions, IndexOptions},
    Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

/// Handle to the provider collection.
///
/// Constructed once at startup and cloned into the request state; the driver's
/// client supports concurrent reads and writes, so no extra locking is needed.
#[derive(Clone)]
pub struct ProviderDb {
    client: MongoClient,
    db: Database,
}

impl ProviderDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for provider-service");

        // Ascending price index backing the range filter and sort. Uniqueness
        // of provider_id needs no index of its own: it is the _id.
        let price_index = IndexModel::builder()
            .keys(doc! { "price": 1 })
            .options(IndexOptions::builder().name("price_idx".to_string()).build())
            .build();

        self.providers()
            .create_index(price_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create price index on providers collection: {}", e);
                AppError::from(e)
            })?;
        tracing::info!("Created index on providers.price");

        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn providers(&self) -> Collection<Provider> {
        self.db.collection("providers")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    /// Providers within the price window, ascending by price.
    pub async fn list(&self, range: &PriceRange) -> Result<Vec<Provider>, AppError> {
        let mut filter = doc! {};
        let mut price = doc! {};
        if let Some(min) = range.min {
            price.insert("$gte", min);
        }
        if let Some(max) = range.max {
            price.insert("$lte", max);
        }
        if !price.is_empty() {
            filter.insert("price", price);
        }

        let find_options = FindOptions::builder().sort(doc! { "price": 1 }).build();

        let cursor = self
            .providers()
            .find(filter, find_options)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list providers: {}", e);
                AppError::from(e)
            })?;

        let providers: Vec<Provider> = cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect providers: {}", e);
            AppError::from(e)
        })?;

        Ok(providers)
    }

    pub async fn find_by_id(&self, provider_id: &str) -> Result<Option<Provider>, AppError> {
        self.providers()
            .find_one(doc! { "_id": provider_id }, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to find provider {}: {}", provider_id, e);
                AppError::from(e)
            })
    }

    /// Insert a new provider. A second record with the same `provider_id`
    /// fails with a duplicate error and leaves the existing record untouched.
    pub async fn insert(&self, provider: &Provider) -> Result<(), AppError> {
        self.providers()
            .insert_one(provider, None)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::Duplicate(anyhow::anyhow!("Provider ID already exists"))
                } else {
                    tracing::error!(
                        provider_id = %provider.provider_id,
                        "Failed to insert provider: {}",
                        e
                    );
                    AppError::from(e)
                }
            })?;
        Ok(())
    }

    /// Remove a provider; returns whether a record was actually deleted.
    pub async fn delete(&self, provider_id: &str) -> Result<bool, AppError> {
        let deleted = self
            .providers()
            .find_one_and_delete(doc! { "_id": provider_id }, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete provider {}: {}", provider_id, e);
                AppError::from(e)
            })?;
        Ok(deleted.is_some())
    }

    /// Best-effort clear of the collection followed by a bulk insert.
    ///
    /// Development bootstrap only; the two steps are not transactional.
    pub async fn reset_and_seed(&self, providers: &[Provider]) -> Result<u64, AppError> {
        let collection = self.providers();

        collection.delete_many(doc! {}, None).await.map_err(|e| {
            tracing::error!("Failed to clear providers collection: {}", e);
            AppError::from(e)
        })?;

        if providers.is_empty() {
            return Ok(0);
        }

        let result = collection.insert_many(providers, None).await.map_err(|e| {
            tracing::error!("Failed to bulk insert providers: {}", e);
            AppError::from(e)
        })?;

        Ok(result.inserted_ids.len() as u64)
    }
}

fn is_duplicate_key_error(err: &mongodb::error::Error) -> bool {
    matches!(
        *err.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref write_err)) if write_err.code == 11000
    )
}
