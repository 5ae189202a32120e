//! Line-item collections for one client session: cart and favourites.
//!
//! Both collections hold display snapshots of catalog items, unique by
//! product id. The cart tracks a per-line quantity and keeps its
//! `item_count`/`total` aggregates in lockstep with the line list; favourites
//! is a plain membership set.
//!
//! Neither type performs any I/O. Hydration goes through
//! [`Cart::from_lines`] / [`Favourites::from_items`], and callers persist the
//! entry lists through whatever adapter they own - aggregates are never
//! persisted, only recomputed.

mod cart;
mod favourites;
mod item;

pub use cart::Cart;
pub use favourites::Favourites;
pub use item::{CartLine, ItemSnapshot};
