//! Urban Wheel Pottery storefront API
//!
//! Serves the static product catalog and accepts contact form submissions,
//! storing them in PostgreSQL when a database is available.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use sea_orm::Database;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{ensure_schema, PostgresContactRepository, UnavailableContactStore};
use app::{CatalogService, ContactService, DiagnosticsService};
use config::Config;
use domain::ports::{ContactRepository, StoreProbe};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<CatalogService>,
    pub contact_service: Arc<ContactService<dyn ContactRepository>>,
    pub diagnostics_service: Arc<DiagnosticsService>,
}

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/test", get(handlers::store_status))
        .route("/api/products", get(handlers::list_products))
        .route("/api/products/:slug", get(handlers::get_product))
        .route("/api/contact", post(handlers::submit_contact))
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Open the contact store. Any failure leaves the server running without one.
async fn connect_store(config: &Config) -> (Arc<dyn ContactRepository>, Arc<dyn StoreProbe>) {
    let Some(url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set, contact messages will not be stored");
        let store = Arc::new(UnavailableContactStore);
        return (store.clone(), store);
    };

    tracing::info!("Connecting to database...");
    match Database::connect(url).await {
        Ok(db) => {
            tracing::info!("Database connected");
            if let Err(e) = ensure_schema(&db).await {
                tracing::warn!(error = %e, "Failed to create contact table");
            }
            let store = Arc::new(PostgresContactRepository::new(db));
            (store.clone(), store)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Database unavailable, continuing without it");
            let store = Arc::new(UnavailableContactStore);
            (store.clone(), store)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,storefront_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Urban Wheel Pottery API...");

    // Load configuration
    let config = Config::from_env();

    let (contacts, probe) = connect_store(&config).await;

    // Create application services
    let catalog_service = Arc::new(CatalogService::default());
    let contact_service = Arc::new(ContactService::new(contacts));
    let diagnostics_service = Arc::new(DiagnosticsService::new(
        probe,
        config.database_url_set(),
        config.database_name_set(),
    ));

    let state = AppState {
        catalog_service,
        contact_service,
        diagnostics_service,
    };

    let app = build_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
