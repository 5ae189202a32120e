//! Treasured Touch Catalog - file-backed catalog repository.
//!
//! The catalog lives in a data directory as three pretty-printed JSON arrays
//! (`products.json`, `categories.json`, `occasions.json`). This crate is the
//! single place that reads and writes that directory; the storefront consumes
//! it read-only, the admin panel replaces and deletes records through it, and
//! the CLI seeds and checks it.
//!
//! # Consistency
//!
//! Reads re-parse the files on every call because the storefront and admin
//! run as separate processes over the same directory. Writes validate the
//! record list, serialize it to a temp file in the same directory, and rename
//! it into place; in-process writers are serialized behind a lock.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod error;
mod store;

pub use error::CatalogError;
pub use store::{CATEGORIES_FILE, CatalogRecord, CatalogStore, OCCASIONS_FILE, PRODUCTS_FILE};
