//! Item snapshots shared by the cart and favourites collections.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{Price, ProductId};

/// Display snapshot of a catalog item at the moment it was added.
///
/// The snapshot is not live-linked to the catalog: later edits to the product
/// do not touch lines already in a cart or favourites list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl From<&Product> for ItemSnapshot {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            category: Some(product.category_id.to_string()),
        }
    }
}

/// One cart entry: an item snapshot plus its quantity.
///
/// Serialized flat (`{id, name, price, image, category, quantity}`), which is
/// the shape the persistence adapter stores under the cart key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub item: ItemSnapshot,
    pub quantity: u32,
}

impl CartLine {
    /// Price of the whole line (unit price times quantity).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.item.price.times(self.quantity)
    }
}
