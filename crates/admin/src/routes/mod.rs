//! HTTP route handlers for the admin API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health               - Liveness check
//! GET    /health/ready         - Readiness check
//!
//! # Catalog management (bearer-token gated when ADMIN_API_TOKEN is set)
//! GET    /api/products         - Product list (plain array)
//! PUT    /api/products         - Replace the product list
//! DELETE /api/products/{id}    - Delete one product
//! GET    /api/categories       - Category list
//! PUT    /api/categories       - Replace the category list
//! DELETE /api/categories/{id}  - Delete one category
//! GET    /api/occasions        - Occasion list
//! PUT    /api/occasions        - Replace the occasion list
//! DELETE /api/occasions/{id}   - Delete one occasion
//! ```
//!
//! Every write responds with `{success, message, data}` where `data` echoes
//! the list as saved; errors respond with `{error, details?}`.

pub mod catalog;

use axum::{
    Router,
    routing::{delete, get},
};

use crate::middleware::auth::require_api_token;
use crate::state::AppState;

/// Create the catalog management routes, gated by the API token.
pub fn api_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(catalog::list_products).put(catalog::replace_products),
        )
        .route("/products/{id}", delete(catalog::delete_product))
        .route(
            "/categories",
            get(catalog::list_categories).put(catalog::replace_categories),
        )
        .route("/categories/{id}", delete(catalog::delete_category))
        .route(
            "/occasions",
            get(catalog::list_occasions).put(catalog::replace_occasions),
        )
        .route("/occasions/{id}", delete(catalog::delete_occasion))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_api_token,
        ))
}

/// Create all routes for the admin API.
pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new().nest("/api", api_routes(state))
}
