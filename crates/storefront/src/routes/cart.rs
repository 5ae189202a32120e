//! Cart route handlers.
//!
//! All cart state is session-scoped: handlers resolve the client's
//! collections through the session id planted by the cookie middleware, and
//! mutate through the registry, which persists the line list after every
//! change. Handlers never compute quantities or totals themselves - the
//! snapshot they return comes off the cart's own aggregates.

use axum::{Extension, Json, extract::State};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use treasured_touch_core::collection::{Cart, CartLine, ItemSnapshot};
use treasured_touch_core::types::{ProductId, SessionId};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Cart snapshot returned to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub item_count: u32,
    pub total: Decimal,
}

/// One cart line as returned to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub quantity: u32,
    pub line_total: Decimal,
}

// =============================================================================
// Type Conversions
// =============================================================================

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.item.id.clone(),
            name: line.item.name.clone(),
            price: line.item.price.amount(),
            image: line.item.image.clone(),
            category: line.item.category.clone(),
            quantity: line.quantity,
            line_total: line.line_total().amount(),
        }
    }
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartLineView::from).collect(),
            item_count: cart.item_count(),
            total: cart.total().amount(),
        }
    }
}

// =============================================================================
// Request Bodies
// =============================================================================

/// Add-to-cart request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartBody {
    pub product_id: ProductId,
}

/// Update-quantity request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartBody {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// Remove-from-cart request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartBody {
    pub product_id: ProductId,
}

/// Cart count badge payload.
#[derive(Debug, Serialize)]
pub struct CartCount {
    pub count: u32,
}

// =============================================================================
// Handlers
// =============================================================================

/// Current cart snapshot.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
) -> Json<CartView> {
    let view = state
        .sessions()
        .read(session_id, |client| CartView::from(&client.cart))
        .await;
    Json(view)
}

/// Add one unit of a product to the cart.
///
/// The product is looked up in the catalog and snapshotted into the line; an
/// unknown product id is a 404. Adding an id already in the cart bumps that
/// line's quantity instead of duplicating it.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
    Json(body): Json<AddToCartBody>,
) -> Result<Json<CartView>> {
    let product = state
        .catalog()
        .product(&body.product_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("product {}", body.product_id)))?;

    let view = state
        .sessions()
        .with_cart(session_id, |cart| {
            cart.add_item(ItemSnapshot::from(&product));
            CartView::from(&*cart)
        })
        .await;
    Ok(Json(view))
}

/// Set a line's quantity; zero or below removes the line.
///
/// Unknown product ids are a no-op, not an error.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
    Json(body): Json<UpdateCartBody>,
) -> Json<CartView> {
    let view = state
        .sessions()
        .with_cart(session_id, |cart| {
            cart.update_quantity(&body.product_id, body.quantity);
            CartView::from(&*cart)
        })
        .await;
    Json(view)
}

/// Remove a line. Unknown product ids are a no-op, not an error.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
    Json(body): Json<RemoveFromCartBody>,
) -> Json<CartView> {
    let view = state
        .sessions()
        .with_cart(session_id, |cart| {
            cart.remove_item(&body.product_id);
            CartView::from(&*cart)
        })
        .await;
    Json(view)
}

/// Empty the cart.
#[instrument(skip(state))]
pub async fn clear(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
) -> Json<CartView> {
    let view = state
        .sessions()
        .with_cart(session_id, |cart| {
            cart.clear();
            CartView::from(&*cart)
        })
        .await;
    Json(view)
}

/// Cart count badge.
#[instrument(skip(state))]
pub async fn count(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
) -> Json<CartCount> {
    let count = state
        .sessions()
        .read(session_id, |client| client.cart.item_count())
        .await;
    Json(CartCount { count })
}
