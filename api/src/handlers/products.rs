//! Product handlers
//!
//! Read-only endpoints over the static catalog.

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Product, ProductFilter};
use crate::error::AppError;
use crate::AppState;

/// Query parameters for listing products
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    #[serde(rename = "type")]
    pub product_type: Option<String>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<f64>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<f64>,
}

impl From<ListProductsQuery> for ProductFilter {
    fn from(query: ListProductsQuery) -> Self {
        ProductFilter {
            product_type: query.product_type,
            min_price: query.min_price,
            max_price: query.max_price,
        }
    }
}

/// Response for listing products
#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub items: Vec<Product>,
}

/// GET /api/products
///
/// List catalog products, optionally filtered by type and price range.
/// Unparseable prices are rejected with 422.
pub async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<ListProductsQuery>, QueryRejection>,
) -> Result<Json<ProductListResponse>, AppError> {
    let Query(query) = query.map_err(|e| AppError::Validation(e.body_text()))?;

    let filter = ProductFilter::from(query);
    let items = state.catalog_service.list(&filter);
    tracing::debug!(?filter, count = items.len(), "Listed products");

    Ok(Json(ProductListResponse { items }))
}

/// GET /api/products/:slug
pub async fn get_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product = state.catalog_service.get(&slug)?;
    Ok(Json(product))
}
