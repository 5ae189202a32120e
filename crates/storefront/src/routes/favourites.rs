//! Favourites route handlers.
//!
//! Mirrors the cart routes without quantities: membership is boolean and the
//! only aggregate is the item count.

use axum::{
    Extension, Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use treasured_touch_core::collection::{Favourites, ItemSnapshot};
use treasured_touch_core::types::{ProductId, SessionId};

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Favourites snapshot returned to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavouritesView {
    pub items: Vec<ItemSnapshot>,
    pub item_count: usize,
}

impl From<&Favourites> for FavouritesView {
    fn from(favourites: &Favourites) -> Self {
        Self {
            items: favourites.items().to_vec(),
            item_count: favourites.item_count(),
        }
    }
}

/// Favourite/unfavourite request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavouriteBody {
    pub product_id: ProductId,
}

/// Membership check payload.
#[derive(Debug, Serialize)]
pub struct FavouriteStatus {
    pub favourite: bool,
}

/// Current favourites snapshot.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
) -> Json<FavouritesView> {
    let view = state
        .sessions()
        .read(session_id, |client| FavouritesView::from(&client.favourites))
        .await;
    Json(view)
}

/// Favourite a product.
///
/// The product is looked up in the catalog and snapshotted; an unknown id is
/// a 404, while favouriting an already-favourited id is a no-op.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
    Json(body): Json<FavouriteBody>,
) -> Result<Json<FavouritesView>> {
    let product = state
        .catalog()
        .product(&body.product_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("product {}", body.product_id)))?;

    let view = state
        .sessions()
        .with_favourites(session_id, |favourites| {
            favourites.add_item(ItemSnapshot::from(&product));
            FavouritesView::from(&*favourites)
        })
        .await;
    Ok(Json(view))
}

/// Unfavourite a product. Unknown ids are a no-op, not an error.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
    Json(body): Json<FavouriteBody>,
) -> Json<FavouritesView> {
    let view = state
        .sessions()
        .with_favourites(session_id, |favourites| {
            favourites.remove_item(&body.product_id);
            FavouritesView::from(&*favourites)
        })
        .await;
    Json(view)
}

/// Empty the favourites list.
#[instrument(skip(state))]
pub async fn clear(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
) -> Json<FavouritesView> {
    let view = state
        .sessions()
        .with_favourites(session_id, |favourites| {
            favourites.clear();
            FavouritesView::from(&*favourites)
        })
        .await;
    Json(view)
}

/// Membership check used to render the favourite toggle.
#[instrument(skip(state))]
pub async fn contains(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
    Path(id): Path<ProductId>,
) -> Json<FavouriteStatus> {
    let favourite = state
        .sessions()
        .read(session_id, |client| client.favourites.is_favourite(&id))
        .await;
    Json(FavouriteStatus { favourite })
}
