//! Integration tests for Treasured Touch.
//!
//! These tests drive the real binaries over HTTP and are `#[ignore]`d by
//! default so `cargo test` stays hermetic.
//!
//! # Running Tests
//!
//! ```bash
//! # Seed a catalog and start both servers against it
//! cargo run -p treasured-touch-cli -- seed --data-dir data
//! cargo run -p treasured-touch-storefront &
//! cargo run -p treasured-touch-admin &
//!
//! # Run the integration tests
//! cargo test -p treasured-touch-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `STOREFRONT_BASE_URL` - Storefront base URL (default: `http://localhost:3000`)
//! - `ADMIN_BASE_URL` - Admin API base URL (default: `http://localhost:3001`)
//! - `ADMIN_API_TOKEN` - Bearer token, when the admin server requires one
//!
//! The admin tests write through the live catalog: they append and then
//! remove records with an `it-test-` id prefix, leaving the rest of the data
//! as they found it.

#![cfg_attr(not(test), forbid(unsafe_code))]

use reqwest::{Client, RequestBuilder};

/// Base URL for the storefront API (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Base URL for the admin API (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}

/// Create a client with a cookie store, so the storefront session cookie
/// set on the first response rides along on every later request.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// Attach the admin bearer token when `ADMIN_API_TOKEN` is set.
#[must_use]
pub fn with_admin_auth(request: RequestBuilder) -> RequestBuilder {
    match std::env::var("ADMIN_API_TOKEN") {
        Ok(token) => request.bearer_auth(token),
        Err(_) => request,
    }
}
