//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use std::sync::Arc;

use crate::app::{CatalogService, ContactService, DiagnosticsService};
use crate::config::Config;
use crate::domain::entities::{NewContactMessage, ProductFilter};
use crate::domain::ports::{ContactRepository, StoreProbe};
use crate::AppState;

/// A submission that passes validation
pub fn valid_contact() -> NewContactMessage {
    NewContactMessage::new(
        "Ada Lovelace",
        "ada@example.com",
        "Do you ship the Terra Mug overseas?",
    )
}

/// Filter by category only
pub fn type_filter(product_type: impl Into<String>) -> ProductFilter {
    ProductFilter {
        product_type: Some(product_type.into()),
        ..Default::default()
    }
}

/// Filter by an inclusive price range
pub fn price_filter(min_price: Option<f64>, max_price: Option<f64>) -> ProductFilter {
    ProductFilter {
        product_type: None,
        min_price,
        max_price,
    }
}

/// Config with no database configured
pub fn test_config() -> Config {
    Config {
        port: 8000,
        database_url: None,
        database_name: None,
    }
}

/// Build application state around a single store implementation
pub fn test_state<S>(store: Arc<S>) -> AppState
where
    S: ContactRepository + StoreProbe + 'static,
{
    let config = test_config();
    let contacts: Arc<dyn ContactRepository> = store.clone();
    let probe: Arc<dyn StoreProbe> = store;

    AppState {
        catalog_service: Arc::new(CatalogService::default()),
        contact_service: Arc::new(ContactService::new(contacts)),
        diagnostics_service: Arc::new(DiagnosticsService::new(
            probe,
            config.database_url_set(),
            config.database_name_set(),
        )),
    }
}
