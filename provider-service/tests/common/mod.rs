use provider_service::config::ProviderConfig;
use provider_service::services::ProviderDb;
use provider_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: ProviderDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let db_name = format!("provider_test_{}", Uuid::new_v4());

        let mut config = ProviderConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.mongodb.database = db_name.clone();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to answer by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            db,
            db_name,
        }
    }

    /// Create a provider through the API and assert it was accepted.
    pub async fn create_provider(
        &self,
        client: &reqwest::Client,
        provider_id: &str,
        name: &str,
        price: f64,
    ) {
        let response = client
            .post(format!("{}/providers", self.address))
            .json(&serde_json::json!({
                "provider_id": provider_id,
                "name": name,
                "price": price,
                "website_link": format!("https://www.example.com/{}", provider_id)
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(
            reqwest::StatusCode::CREATED,
            response.status(),
            "failed to create fixture provider {}",
            provider_id
        );
    }

    /// Drop the test database.
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
