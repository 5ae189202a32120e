//! Catalog management handlers.
//!
//! Reads return the stored list as a plain array. Writes go through the
//! catalog repository, which validates and persists atomically, and respond
//! with the list as saved so the admin client can re-render without a
//! follow-up fetch. Deleting an id that is not present succeeds and echoes
//! the unchanged list.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use tracing::instrument;

use treasured_touch_core::catalog::{Category, Occasion, Product};
use treasured_touch_core::types::{CategoryId, OccasionId, ProductId};

use crate::error::Result;
use crate::state::AppState;

/// Response body for catalog writes: the saved list plus an outcome note.
#[derive(Debug, Serialize)]
pub struct SaveResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Vec<T>,
}

impl<T> SaveResponse<T> {
    fn saved(message: &str, data: Vec<T>) -> Json<Self> {
        Json(Self {
            success: true,
            message: message.to_string(),
            data,
        })
    }
}

// =============================================================================
// Products
// =============================================================================

/// Product list.
#[instrument(skip(state))]
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog().products().await)
}

/// Replace the whole product list.
#[instrument(skip(state, products), fields(count = products.len()))]
pub async fn replace_products(
    State(state): State<AppState>,
    Json(products): Json<Vec<Product>>,
) -> Result<Json<SaveResponse<Product>>> {
    let saved = state.catalog().replace_products(products).await?;
    Ok(SaveResponse::saved("Products updated successfully", saved))
}

/// Delete one product and echo the remaining list.
#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Result<Json<SaveResponse<Product>>> {
    let remaining = state.catalog().delete_product(&id).await?;
    Ok(SaveResponse::saved("Product deleted successfully", remaining))
}

// =============================================================================
// Categories
// =============================================================================

/// Category list.
#[instrument(skip(state))]
pub async fn list_categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    Json(state.catalog().categories().await)
}

/// Replace the whole category list.
#[instrument(skip(state, categories), fields(count = categories.len()))]
pub async fn replace_categories(
    State(state): State<AppState>,
    Json(categories): Json<Vec<Category>>,
) -> Result<Json<SaveResponse<Category>>> {
    let saved = state.catalog().replace_categories(categories).await?;
    Ok(SaveResponse::saved("Categories updated successfully", saved))
}

/// Delete one category and echo the remaining list.
#[instrument(skip(state))]
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<CategoryId>,
) -> Result<Json<SaveResponse<Category>>> {
    let remaining = state.catalog().delete_category(&id).await?;
    Ok(SaveResponse::saved("Category deleted successfully", remaining))
}

// =============================================================================
// Occasions
// =============================================================================

/// Occasion list.
#[instrument(skip(state))]
pub async fn list_occasions(State(state): State<AppState>) -> Json<Vec<Occasion>> {
    Json(state.catalog().occasions().await)
}

/// Replace the whole occasion list.
#[instrument(skip(state, occasions), fields(count = occasions.len()))]
pub async fn replace_occasions(
    State(state): State<AppState>,
    Json(occasions): Json<Vec<Occasion>>,
) -> Result<Json<SaveResponse<Occasion>>> {
    let saved = state.catalog().replace_occasions(occasions).await?;
    Ok(SaveResponse::saved("Occasions updated successfully", saved))
}

/// Delete one occasion and echo the remaining list.
#[instrument(skip(state))]
pub async fn delete_occasion(
    State(state): State<AppState>,
    Path(id): Path<OccasionId>,
) -> Result<Json<SaveResponse<Occasion>>> {
    let remaining = state.catalog().delete_occasion(&id).await?;
    Ok(SaveResponse::saved("Occasion deleted successfully", remaining))
}
