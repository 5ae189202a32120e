//! The catalog store: typed read/replace/delete over the data directory.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use uuid::Uuid;

use treasured_touch_core::catalog::{Category, Occasion, Product};
use treasured_touch_core::types::{CategoryId, OccasionId, ProductId};

use crate::error::CatalogError;

/// File name for the product list.
pub const PRODUCTS_FILE: &str = "products.json";
/// File name for the category list.
pub const CATEGORIES_FILE: &str = "categories.json";
/// File name for the occasion list.
pub const OCCASIONS_FILE: &str = "occasions.json";

/// Access to the identifying fields shared by every catalog record type.
///
/// Lets the store validate any record list the same way: non-empty unique
/// ids, non-empty names.
pub trait CatalogRecord {
    fn record_id(&self) -> &str;
    fn record_name(&self) -> &str;
}

impl CatalogRecord for Product {
    fn record_id(&self) -> &str {
        self.id.as_str()
    }

    fn record_name(&self) -> &str {
        &self.name
    }
}

impl CatalogRecord for Category {
    fn record_id(&self) -> &str {
        self.id.as_str()
    }

    fn record_name(&self) -> &str {
        &self.name
    }
}

impl CatalogRecord for Occasion {
    fn record_id(&self) -> &str {
        self.id.as_str()
    }

    fn record_name(&self) -> &str {
        &self.name
    }
}

/// File-backed catalog repository over one data directory.
///
/// Construct one per process and share it through application state.
pub struct CatalogStore {
    data_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl CatalogStore {
    /// Create a store over `data_dir`.
    ///
    /// The directory does not need to exist yet; it is created on the first
    /// write, and reads of a missing directory yield empty lists.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The directory this store reads and writes.
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// All products, or an empty list if the file is absent or unreadable.
    pub async fn products(&self) -> Vec<Product> {
        self.read_list(PRODUCTS_FILE).await
    }

    /// One product by id.
    pub async fn product(&self, id: &ProductId) -> Option<Product> {
        self.products().await.into_iter().find(|p| &p.id == id)
    }

    /// All categories, or an empty list if the file is absent or unreadable.
    pub async fn categories(&self) -> Vec<Category> {
        self.read_list(CATEGORIES_FILE).await
    }

    /// All occasions, or an empty list if the file is absent or unreadable.
    pub async fn occasions(&self) -> Vec<Occasion> {
        self.read_list(OCCASIONS_FILE).await
    }

    /// Replace the whole product list and return what was saved.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Invalid`] when the list fails validation, or
    /// an I/O/serialization error when the write fails.
    pub async fn replace_products(
        &self,
        products: Vec<Product>,
    ) -> Result<Vec<Product>, CatalogError> {
        validate(&products)?;
        let _guard = self.write_lock.lock().await;
        self.write_unlocked(PRODUCTS_FILE, &products).await?;
        Ok(products)
    }

    /// Replace the whole category list and return what was saved.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::replace_products`].
    pub async fn replace_categories(
        &self,
        categories: Vec<Category>,
    ) -> Result<Vec<Category>, CatalogError> {
        validate(&categories)?;
        let _guard = self.write_lock.lock().await;
        self.write_unlocked(CATEGORIES_FILE, &categories).await?;
        Ok(categories)
    }

    /// Replace the whole occasion list and return what was saved.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::replace_products`].
    pub async fn replace_occasions(
        &self,
        occasions: Vec<Occasion>,
    ) -> Result<Vec<Occasion>, CatalogError> {
        validate(&occasions)?;
        let _guard = self.write_lock.lock().await;
        self.write_unlocked(OCCASIONS_FILE, &occasions).await?;
        Ok(occasions)
    }

    /// Delete the product with `id` and return the remaining list.
    ///
    /// Deleting an id that is not present is not an error; the list is
    /// written back unchanged.
    ///
    /// # Errors
    ///
    /// Returns an I/O/serialization error when the write fails.
    pub async fn delete_product(&self, id: &ProductId) -> Result<Vec<Product>, CatalogError> {
        let _guard = self.write_lock.lock().await;
        let mut products: Vec<Product> = self.read_list(PRODUCTS_FILE).await;
        products.retain(|p| &p.id != id);
        self.write_unlocked(PRODUCTS_FILE, &products).await?;
        Ok(products)
    }

    /// Delete the category with `id` and return the remaining list.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::delete_product`].
    pub async fn delete_category(&self, id: &CategoryId) -> Result<Vec<Category>, CatalogError> {
        let _guard = self.write_lock.lock().await;
        let mut categories: Vec<Category> = self.read_list(CATEGORIES_FILE).await;
        categories.retain(|c| &c.id != id);
        self.write_unlocked(CATEGORIES_FILE, &categories).await?;
        Ok(categories)
    }

    /// Delete the occasion with `id` and return the remaining list.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::delete_product`].
    pub async fn delete_occasion(&self, id: &OccasionId) -> Result<Vec<Occasion>, CatalogError> {
        let _guard = self.write_lock.lock().await;
        let mut occasions: Vec<Occasion> = self.read_list(OCCASIONS_FILE).await;
        occasions.retain(|o| &o.id != id);
        self.write_unlocked(OCCASIONS_FILE, &occasions).await?;
        Ok(occasions)
    }

    async fn read_list<T: DeserializeOwned>(&self, file_name: &str) -> Vec<T> {
        let path = self.data_dir.join(file_name);
        let raw = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                tracing::warn!(file = file_name, error = %err, "failed to read catalog file");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(err) => {
                tracing::warn!(
                    file = file_name,
                    error = %err,
                    "catalog file is not a valid record list, treating as empty"
                );
                Vec::new()
            }
        }
    }

    // Callers must hold `write_lock`.
    async fn write_unlocked<T: Serialize>(
        &self,
        file_name: &str,
        items: &[T],
    ) -> Result<(), CatalogError> {
        tokio::fs::create_dir_all(&self.data_dir).await?;
        let payload = serde_json::to_string_pretty(items)?;

        // Rename is atomic on the same filesystem, so a concurrent reader
        // sees either the old list or the new one, never a partial write.
        let path = self.data_dir.join(file_name);
        let tmp = self.data_dir.join(format!("{file_name}.tmp-{}", Uuid::new_v4()));
        tokio::fs::write(&tmp, payload).await?;
        if let Err(err) = tokio::fs::rename(&tmp, &path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(err.into());
        }
        Ok(())
    }
}

fn validate<T: CatalogRecord>(items: &[T]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for item in items {
        let id = item.record_id();
        if id.trim().is_empty() {
            return Err(CatalogError::Invalid("record with an empty id".to_owned()));
        }
        if item.record_name().trim().is_empty() {
            return Err(CatalogError::Invalid(format!(
                "record '{id}' has an empty name"
            )));
        }
        if !seen.insert(id) {
            return Err(CatalogError::Invalid(format!("duplicate id '{id}'")));
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use treasured_touch_core::types::Price;

    use super::*;

    fn product(id: &str, rupees: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Gift {id}"),
            description: String::new(),
            price: Price::from_rupees(rupees),
            original_price: None,
            category_id: CategoryId::new("hampers"),
            occasion_id: None,
            image: format!("/images/{id}.jpg"),
            featured: false,
            in_stock: true,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_missing_files_read_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::new(dir.path());

        assert!(store.products().await.is_empty());
        assert!(store.categories().await.is_empty());
        assert!(store.occasions().await.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PRODUCTS_FILE), "{not json").unwrap();

        let store = CatalogStore::new(dir.path());
        assert!(store.products().await.is_empty());
    }

    #[tokio::test]
    async fn test_replace_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::new(dir.path());

        let saved = store
            .replace_products(vec![product("p1", 500), product("p2", 750)])
            .await
            .unwrap();
        assert_eq!(saved.len(), 2);

        let loaded = store.products().await;
        assert_eq!(loaded, saved);
        assert_eq!(
            store.product(&ProductId::new("p2")).await.unwrap().price,
            Price::from_rupees(750)
        );
    }

    #[tokio::test]
    async fn test_replace_rejects_duplicate_ids() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::new(dir.path());

        let err = store
            .replace_products(vec![product("p1", 500), product("p1", 750)])
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));

        // Nothing was written
        assert!(store.products().await.is_empty());
    }

    #[tokio::test]
    async fn test_replace_rejects_blank_id_and_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::new(dir.path());

        let mut blank_id = product("p1", 500);
        blank_id.id = ProductId::new("  ");
        assert!(store.replace_products(vec![blank_id]).await.is_err());

        let mut blank_name = product("p1", 500);
        blank_name.name = String::new();
        assert!(store.replace_products(vec![blank_name]).await.is_err());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::new(dir.path());
        store
            .replace_products(vec![product("p1", 500), product("p2", 750)])
            .await
            .unwrap();

        let remaining = store.delete_product(&ProductId::new("p1")).await.unwrap();
        assert_eq!(remaining.len(), 1);

        // Unknown id leaves the list untouched
        let remaining = store.delete_product(&ProductId::new("p1")).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining.first().unwrap().id, ProductId::new("p2"));
    }

    #[tokio::test]
    async fn test_writes_leave_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::new(dir.path());
        store.replace_products(vec![product("p1", 500)]).await.unwrap();

        let stray: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_name().to_string_lossy().contains(".tmp-"))
            .collect();
        assert!(stray.is_empty());
    }
}
