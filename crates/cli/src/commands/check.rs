//! Check the catalog data directory for integrity problems.
//!
//! Unlike the servers, which shrug off a bad file and serve an empty list,
//! the check parses strictly and reports everything it finds: unreadable or
//! malformed files, blank or duplicate ids, and products referencing a
//! category or occasion that does not exist. Missing files are fine (a fresh
//! deployment has none).

use std::collections::HashSet;
use std::path::Path;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{error, info};

use treasured_touch_catalog::{CATEGORIES_FILE, OCCASIONS_FILE, PRODUCTS_FILE};
use treasured_touch_core::catalog::{Category, Occasion, Product};

/// Errors that can occur during a catalog check.
#[derive(Debug, Error)]
pub enum CheckError {
    /// The catalog has integrity problems; each one has been logged.
    #[error("{0} problem(s) found in catalog data")]
    Failed(usize),
}

/// Check the catalog in `data_dir` and report problems.
///
/// # Errors
///
/// Returns [`CheckError::Failed`] with the problem count when anything is
/// wrong; the individual problems are logged as errors.
pub async fn run(data_dir: &Path) -> Result<(), CheckError> {
    let mut problems = Vec::new();

    let products: Vec<Product> = load_list(data_dir, PRODUCTS_FILE, &mut problems).await;
    let categories: Vec<Category> = load_list(data_dir, CATEGORIES_FILE, &mut problems).await;
    let occasions: Vec<Occasion> = load_list(data_dir, OCCASIONS_FILE, &mut problems).await;

    check_ids(
        PRODUCTS_FILE,
        products.iter().map(|p| (p.id.as_str(), p.name.as_str())),
        &mut problems,
    );
    check_ids(
        CATEGORIES_FILE,
        categories.iter().map(|c| (c.id.as_str(), c.name.as_str())),
        &mut problems,
    );
    check_ids(
        OCCASIONS_FILE,
        occasions.iter().map(|o| (o.id.as_str(), o.name.as_str())),
        &mut problems,
    );

    let category_ids: HashSet<&str> = categories.iter().map(|c| c.id.as_str()).collect();
    let occasion_ids: HashSet<&str> = occasions.iter().map(|o| o.id.as_str()).collect();
    for product in &products {
        if !category_ids.contains(product.category_id.as_str()) {
            problems.push(format!(
                "product '{}' references unknown category '{}'",
                product.id, product.category_id
            ));
        }
        if let Some(occasion_id) = &product.occasion_id {
            if !occasion_ids.contains(occasion_id.as_str()) {
                problems.push(format!(
                    "product '{}' references unknown occasion '{occasion_id}'",
                    product.id
                ));
            }
        }
    }

    if problems.is_empty() {
        info!(
            data_dir = %data_dir.display(),
            products = products.len(),
            categories = categories.len(),
            occasions = occasions.len(),
            "Catalog is consistent"
        );
        return Ok(());
    }

    for problem in &problems {
        error!("{problem}");
    }
    Err(CheckError::Failed(problems.len()))
}

/// Strictly parse one catalog file, recording problems instead of shrugging.
async fn load_list<T: DeserializeOwned>(
    data_dir: &Path,
    file_name: &str,
    problems: &mut Vec<String>,
) -> Vec<T> {
    let path = data_dir.join(file_name);
    let raw = match tokio::fs::read_to_string(&path).await {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            info!(file = file_name, "file is absent, treating as empty");
            return Vec::new();
        }
        Err(err) => {
            problems.push(format!("cannot read {file_name}: {err}"));
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(list) => list,
        Err(err) => {
            problems.push(format!("{file_name} is not a valid record list: {err}"));
            Vec::new()
        }
    }
}

fn check_ids<'a>(
    file_name: &str,
    records: impl Iterator<Item = (&'a str, &'a str)>,
    problems: &mut Vec<String>,
) {
    let mut seen = HashSet::new();
    for (id, name) in records {
        if id.trim().is_empty() {
            problems.push(format!("{file_name}: record with an empty id"));
            continue;
        }
        if name.trim().is_empty() {
            problems.push(format!("{file_name}: record '{id}' has an empty name"));
        }
        if !seen.insert(id) {
            problems.push(format!("{file_name}: duplicate id '{id}'"));
        }
    }
}
