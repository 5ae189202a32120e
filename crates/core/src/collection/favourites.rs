//! Favourites collection: a membership set of item snapshots.

use crate::types::ProductId;

use super::item::ItemSnapshot;

/// The favourites list for one client session.
///
/// Entries are unique by product id and carry no quantity; adding an id that
/// is already present is a no-op. The only aggregate is cardinality.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favourites {
    items: Vec<ItemSnapshot>,
}

impl Favourites {
    /// Create an empty favourites list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrate from a persisted item list, keeping the first entry for any
    /// duplicated id.
    #[must_use]
    pub fn from_items(items: Vec<ItemSnapshot>) -> Self {
        let mut favourites = Self::new();
        for item in items {
            favourites.add_item(item);
        }
        favourites
    }

    /// Insert `item` unless an entry with the same id already exists.
    pub fn add_item(&mut self, item: ItemSnapshot) {
        if !self.is_favourite(&item.id) {
            self.items.push(item);
        }
    }

    /// Remove the entry with `id`, if present.
    pub fn remove_item(&mut self, id: &ProductId) {
        self.items.retain(|item| &item.id != id);
    }

    /// Whether `id` is currently favourited.
    #[must_use]
    pub fn is_favourite(&self, id: &ProductId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    /// Empty the list.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Current entries, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[ItemSnapshot] {
        &self.items
    }

    /// Number of favourited items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Whether the list holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::Price;

    fn snapshot(id: &str) -> ItemSnapshot {
        ItemSnapshot {
            id: ProductId::new(id),
            name: format!("Gift {id}"),
            price: Price::from_rupees(500),
            image: format!("/images/{id}.jpg"),
            category: None,
        }
    }

    #[test]
    fn test_add_is_a_set_insert() {
        let mut favourites = Favourites::new();
        favourites.add_item(snapshot("f1"));
        assert!(favourites.is_favourite(&ProductId::new("f1")));
        assert_eq!(favourites.item_count(), 1);

        favourites.add_item(snapshot("f1"));
        assert_eq!(favourites.item_count(), 1);
    }

    #[test]
    fn test_remove_twice_is_harmless() {
        let mut favourites = Favourites::new();
        favourites.add_item(snapshot("f1"));

        favourites.remove_item(&ProductId::new("f1"));
        let once = favourites.clone();
        favourites.remove_item(&ProductId::new("f1"));

        assert_eq!(favourites, once);
        assert!(!favourites.is_favourite(&ProductId::new("f1")));
    }

    #[test]
    fn test_clear_empties_the_set() {
        let mut favourites = Favourites::new();
        favourites.add_item(snapshot("f1"));
        favourites.add_item(snapshot("f2"));
        favourites.clear();

        assert!(favourites.is_empty());
        assert_eq!(favourites.item_count(), 0);
    }

    #[test]
    fn test_hydration_dedupes_by_id() {
        let favourites = Favourites::from_items(vec![
            snapshot("f1"),
            snapshot("f2"),
            snapshot("f1"),
        ]);
        assert_eq!(favourites.item_count(), 2);
    }
}
