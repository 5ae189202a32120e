//! Catalog read routes.
//!
//! The storefront only ever reads the catalog; writes go through the admin
//! panel. Lists come straight off the repository, with optional filters
//! applied in-process.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::instrument;

use treasured_touch_core::catalog::{Category, Occasion, Product};
use treasured_touch_core::types::{CategoryId, OccasionId, ProductId};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Product list filters.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    pub category_id: Option<CategoryId>,
    pub occasion_id: Option<OccasionId>,
    pub featured: Option<bool>,
}

impl ProductFilter {
    fn matches(&self, product: &Product) -> bool {
        self.category_id
            .as_ref()
            .is_none_or(|category_id| &product.category_id == category_id)
            && self
                .occasion_id
                .as_ref()
                .is_none_or(|occasion_id| product.occasion_id.as_ref() == Some(occasion_id))
            && self.featured.is_none_or(|featured| product.featured == featured)
    }
}

/// Product list, optionally filtered.
#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    Query(filter): Query<ProductFilter>,
) -> Json<Vec<Product>> {
    let products = state
        .catalog()
        .products()
        .await
        .into_iter()
        .filter(|product| filter.matches(product))
        .collect();
    Json(products)
}

/// One product by id.
#[instrument(skip(state))]
pub async fn show_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<Product>> {
    state
        .catalog()
        .product(&id)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))
}

/// Category list.
#[instrument(skip(state))]
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.catalog().categories().await)
}

/// Occasion list.
#[instrument(skip(state))]
pub async fn list_occasions(State(state): State<AppState>) -> Json<Vec<Occasion>> {
    Json(state.catalog().occasions().await)
}
