use crate::config::ProviderConfig;
use crate::handlers;
use crate::services::ProviderDb;
use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{metrics::metrics_middleware, tracing::request_id_middleware};
use std::future::IntoFuture;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: ProviderConfig,
    pub db: ProviderDb,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    pub async fn build(config: ProviderConfig) -> Result<Self, AppError> {
        let db = ProviderDb::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;

        // A store that is down at startup must not keep the service from
        // coming up; requests fail with a database error until it recovers.
        if let Err(e) = db.initialize_indexes().await {
            tracing::warn!("Failed to initialize database indexes: {}", e);
        }

        let state = AppState {
            config: config.clone(),
            db: db.clone(),
        };

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .route("/metrics", get(handlers::metrics_endpoint))
            .route(
                "/providers",
                get(handlers::list_providers).post(handlers::create_provider),
            )
            .route(
                "/providers/:id",
                get(handlers::get_provider).delete(handlers::delete_provider),
            )
            .route("/seed", post(handlers::seed_database))
            .layer(CorsLayer::permissive())
            .layer(from_fn(metrics_middleware))
            .layer(TraceLayer::new_for_http())
            .layer(from_fn(request_id_middleware))
            .with_state(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn db(&self) -> &ProviderDb {
        &self.state.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
