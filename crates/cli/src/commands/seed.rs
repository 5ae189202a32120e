//! Seed the catalog data directory with a sample catalog.
//!
//! Writes `products.json`, `categories.json`, and `occasions.json` through
//! the catalog repository, so the sample passes the same validation and
//! atomic-write path as an admin edit. Existing files are never touched
//! unless `--force` is given.

use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;
use tracing::info;

use treasured_touch_catalog::{
    CATEGORIES_FILE, CatalogError, CatalogStore, OCCASIONS_FILE, PRODUCTS_FILE,
};
use treasured_touch_core::catalog::{Category, Occasion, Product};
use treasured_touch_core::types::{CategoryId, OccasionId, Price, ProductId};

/// Errors that can occur during seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// A catalog file already exists and `--force` was not given.
    #[error("refusing to overwrite existing catalog file {0} (re-run with --force)")]
    WouldOverwrite(PathBuf),

    /// Writing through the catalog repository failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Write the sample catalog into `data_dir`.
///
/// # Errors
///
/// Returns [`SeedError::WouldOverwrite`] when a catalog file already exists
/// and `force` is false, or a [`CatalogError`] when the write fails.
pub async fn run(data_dir: &Path, force: bool) -> Result<(), SeedError> {
    if !force {
        for file_name in [PRODUCTS_FILE, CATEGORIES_FILE, OCCASIONS_FILE] {
            let path = data_dir.join(file_name);
            if path.exists() {
                return Err(SeedError::WouldOverwrite(path));
            }
        }
    }

    let store = CatalogStore::new(data_dir);
    let categories = store.replace_categories(sample_categories()).await?;
    let occasions = store.replace_occasions(sample_occasions()).await?;
    let products = store.replace_products(sample_products()).await?;

    info!(
        data_dir = %data_dir.display(),
        products = products.len(),
        categories = categories.len(),
        occasions = occasions.len(),
        "Sample catalog written"
    );
    Ok(())
}

fn sample_categories() -> Vec<Category> {
    [
        (
            "memory-albums",
            "Memory Albums",
            "Hand-bound albums that tell your story page by page",
        ),
        (
            "music-boxes",
            "Music Boxes",
            "Custom-engraved music boxes with your melody",
        ),
        (
            "gift-hampers",
            "Gift Hampers",
            "Curated hampers assembled for the person, not the shelf",
        ),
        (
            "photo-frames",
            "Personalised Frames",
            "Frames engraved with names, dates, and little jokes",
        ),
    ]
    .into_iter()
    .map(|(id, name, description)| Category {
        id: CategoryId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        image: format!("/images/categories/{id}.jpg"),
    })
    .collect()
}

fn sample_occasions() -> Vec<Occasion> {
    [
        ("anniversary", "Anniversary", "Mark the years together"),
        ("birthday", "Birthday", "Surprises that beat another gadget"),
        ("proposal", "Proposal", "Everything around the question"),
        ("wedding", "Wedding", "Gifts for the couple and the party"),
    ]
    .into_iter()
    .map(|(id, name, description)| Occasion {
        id: OccasionId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        image: format!("/images/occasions/{id}.jpg"),
    })
    .collect()
}

fn sample_products() -> Vec<Product> {
    struct Sample {
        id: &'static str,
        name: &'static str,
        description: &'static str,
        price: u32,
        original_price: Option<u32>,
        category: &'static str,
        occasion: Option<&'static str>,
        featured: bool,
    }

    let samples = [
        Sample {
            id: "anniversary-memory-album",
            name: "Anniversary Memory Album",
            description: "A hand-bound album of your first decade, arranged year by year.",
            price: 2499,
            original_price: Some(2999),
            category: "memory-albums",
            occasion: Some("anniversary"),
            featured: true,
        },
        Sample {
            id: "proposal-music-box",
            name: "Proposal Music Box",
            description: "Plays your song; the ring drawer is under the dancer.",
            price: 3499,
            original_price: None,
            category: "music-boxes",
            occasion: Some("proposal"),
            featured: true,
        },
        Sample {
            id: "birthday-scrapbook",
            name: "Birthday Scrapbook",
            description: "Sixteen years of photographs, notes, and ticket stubs.",
            price: 1799,
            original_price: None,
            category: "memory-albums",
            occasion: Some("birthday"),
            featured: false,
        },
        Sample {
            id: "wedding-hamper",
            name: "Wedding Morning Hamper",
            description: "For the couple's first breakfast: tea, preserves, and a keepsake card.",
            price: 2199,
            original_price: Some(2499),
            category: "gift-hampers",
            occasion: Some("wedding"),
            featured: false,
        },
        Sample {
            id: "engraved-family-frame",
            name: "Engraved Family Frame",
            description: "Walnut frame engraved with names and the family motto.",
            price: 1299,
            original_price: None,
            category: "photo-frames",
            occasion: None,
            featured: true,
        },
        Sample {
            id: "festive-treats-hamper",
            name: "Festive Treats Hamper",
            description: "Small-batch sweets and a hand-written note for the season.",
            price: 999,
            original_price: None,
            category: "gift-hampers",
            occasion: None,
            featured: false,
        },
    ];

    let created_at = Utc::now();
    samples
        .into_iter()
        .map(|sample| Product {
            id: ProductId::new(sample.id),
            name: sample.name.to_owned(),
            description: sample.description.to_owned(),
            price: Price::from_rupees(sample.price),
            original_price: sample.original_price.map(Price::from_rupees),
            category_id: CategoryId::new(sample.category),
            occasion_id: sample.occasion.map(OccasionId::new),
            image: format!("/images/products/{}.jpg", sample.id),
            featured: sample.featured,
            in_stock: true,
            created_at,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seed_writes_a_consistent_catalog() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path(), false).await.unwrap();

        let store = CatalogStore::new(dir.path());
        let products = store.products().await;
        let categories = store.categories().await;
        let occasions = store.occasions().await;
        assert!(!products.is_empty());

        // Every reference in the sample resolves
        for product in &products {
            assert!(categories.iter().any(|c| c.id == product.category_id));
            if let Some(occasion_id) = &product.occasion_id {
                assert!(occasions.iter().any(|o| &o.id == occasion_id));
            }
        }
    }

    #[tokio::test]
    async fn test_seed_refuses_to_overwrite_without_force() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path(), false).await.unwrap();

        let err = run(dir.path(), false).await.unwrap_err();
        assert!(matches!(err, SeedError::WouldOverwrite(_)));

        run(dir.path(), true).await.unwrap();
    }
}
