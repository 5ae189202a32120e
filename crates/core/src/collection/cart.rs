//! Shopping cart collection with derived aggregates.

use crate::types::{Price, ProductId};

use super::item::{CartLine, ItemSnapshot};

/// The cart for one client session.
///
/// Lines are unique by product id and keep their insertion order. The
/// `item_count` and `total` aggregates are recomputed inside every mutation,
/// so no reader can observe an aggregate that disagrees with the line list.
///
/// Operations on ids that are not present are silent no-ops: the cart
/// favours idempotence over strictness, and calling [`Cart::remove_item`]
/// twice is harmless.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
    item_count: u32,
    total: Price,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrate a cart from a persisted line list.
    ///
    /// The list is sanitized on the way in: lines with a zero quantity are
    /// dropped and duplicate ids are merged by summing quantities, so the
    /// id-uniqueness and `quantity >= 1` invariants hold even for entries
    /// written by an older build. Aggregates are recomputed here, never read
    /// from storage.
    #[must_use]
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            if line.quantity == 0 {
                continue;
            }
            if let Some(existing) = cart.line_mut(&line.item.id) {
                existing.quantity = existing.quantity.saturating_add(line.quantity);
            } else {
                cart.lines.push(line);
            }
        }
        cart.recompute();
        cart
    }

    /// Add one unit of `item`.
    ///
    /// If a line with the same id already exists, its quantity goes up by one
    /// and the stored snapshot wins over any differing fields on `item`.
    /// Otherwise a new line is appended with quantity 1.
    pub fn add_item(&mut self, item: ItemSnapshot) {
        if let Some(line) = self.line_mut(&item.id) {
            line.quantity = line.quantity.saturating_add(1);
        } else {
            self.lines.push(CartLine { item, quantity: 1 });
        }
        self.recompute();
    }

    /// Remove the line with `id`, if present.
    pub fn remove_item(&mut self, id: &ProductId) {
        self.lines.retain(|line| &line.item.id != id);
        self.recompute();
    }

    /// Set the quantity of the line with `id`.
    ///
    /// Quantities are absolute, not additive. A quantity of zero or below
    /// removes the line entirely; a line is never stored at zero. Unknown ids
    /// are ignored.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.line_mut(id) {
            line.quantity = quantity;
        }
        self.recompute();
    }

    /// Empty the cart and reset the aggregates.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.recompute();
    }

    /// Current lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total number of units across all lines.
    #[must_use]
    pub const fn item_count(&self) -> u32 {
        self.item_count
    }

    /// Sum of `price * quantity` across all lines.
    #[must_use]
    pub const fn total(&self) -> Price {
        self.total
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| &line.item.id == id)
    }

    // The aggregates are only ever written here, inside a mutation.
    fn recompute(&mut self) {
        self.item_count = self.lines.iter().map(|line| line.quantity).sum();
        self.total = self.lines.iter().map(CartLine::line_total).sum();
    }
}
