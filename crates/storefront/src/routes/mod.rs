//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check
//!
//! # Catalog (read-only)
//! GET  /api/products           - Product list (?categoryId=&occasionId=&featured=)
//! GET  /api/products/{id}      - One product
//! GET  /api/categories         - Category list
//! GET  /api/occasions          - Occasion list
//!
//! # Cart (session-scoped)
//! GET  /cart                   - Cart snapshot {items, itemCount, total}
//! POST /cart/add               - Add one unit of a product
//! POST /cart/update            - Set a line's quantity (<= 0 removes)
//! POST /cart/remove            - Remove a line
//! POST /cart/clear             - Empty the cart
//! GET  /cart/count             - Unit count badge
//!
//! # Favourites (session-scoped)
//! GET  /favourites             - Favourites snapshot {items, itemCount}
//! POST /favourites/add         - Favourite a product
//! POST /favourites/remove      - Unfavourite a product
//! POST /favourites/clear       - Empty the list
//! GET  /favourites/{id}        - Membership check {favourite}
//!
//! # Auth (mocked)
//! POST /auth/login             - Sign the session in
//! POST /auth/signup            - Sign the session up
//! GET  /auth/me                - Current user or 401
//! POST /auth/logout            - Sign the session out
//! ```

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod favourites;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the catalog routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(catalog::list_products))
        .route("/products/{id}", get(catalog::show_product))
        .route("/categories", get(catalog::list_categories))
        .route("/occasions", get(catalog::list_occasions))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create the favourites routes router.
pub fn favourites_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(favourites::show))
        .route("/add", post(favourites::add))
        .route("/remove", post(favourites::remove))
        .route("/clear", post(favourites::clear))
        .route("/{id}", get(favourites::contains))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/signup", post(auth::signup))
        .route("/me", get(auth::me))
        .route("/logout", post(auth::logout))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api", catalog_routes())
        .nest("/cart", cart_routes())
        .nest("/favourites", favourites_routes())
        .nest("/auth", auth_routes())
}
