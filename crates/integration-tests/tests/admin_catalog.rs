//! Integration tests for the admin catalog API.
//!
//! These tests require:
//! - The admin server running (cargo run -p treasured-touch-admin)
//! - `ADMIN_API_TOKEN` in the environment when the server has one configured
//!
//! They append and then delete an occasion with an `it-test-` id, leaving
//! the catalog as they found it.
//!
//! Run with: cargo test -p treasured-touch-integration-tests -- --ignored

#![allow(clippy::unwrap_used)]

use reqwest::StatusCode;
use serde_json::{Value, json};

use treasured_touch_integration_tests::{admin_base_url, client, with_admin_auth};

const TEST_OCCASION_ID: &str = "it-test-occasion";

#[tokio::test]
#[ignore = "Requires a running admin server"]
async fn test_health_endpoint() {
    let client = client();
    let base_url = admin_base_url();

    let resp = client
        .get(format!("{base_url}/health"))
        .send()
        .await
        .expect("Failed to reach admin server");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires a running admin server"]
async fn test_replace_and_delete_round_trip() {
    let client = client();
    let base_url = admin_base_url();

    let occasions: Value = with_admin_auth(client.get(format!("{base_url}/api/occasions")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let mut list = occasions.as_array().unwrap().clone();
    list.push(json!({
        "id": TEST_OCCASION_ID,
        "name": "Integration Test Occasion",
        "description": "Temporary record, safe to delete",
        "image": ""
    }));

    // Replace echoes the saved list
    let saved: Value = with_admin_auth(client.put(format!("{base_url}/api/occasions")))
        .json(&list)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(saved["success"], true);
    assert!(
        saved["data"]
            .as_array()
            .unwrap()
            .iter()
            .any(|o| o["id"] == TEST_OCCASION_ID)
    );

    // Delete echoes the remaining list
    let deleted: Value = with_admin_auth(
        client.delete(format!("{base_url}/api/occasions/{TEST_OCCASION_ID}")),
    )
    .send()
    .await
    .unwrap()
    .json()
    .await
    .unwrap();
    assert_eq!(deleted["success"], true);
    assert!(
        !deleted["data"]
            .as_array()
            .unwrap()
            .iter()
            .any(|o| o["id"] == TEST_OCCASION_ID)
    );
}

#[tokio::test]
#[ignore = "Requires a running admin server"]
async fn test_duplicate_ids_are_rejected_without_writing() {
    let client = client();
    let base_url = admin_base_url();

    let before: Value = with_admin_auth(client.get(format!("{base_url}/api/occasions")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let duplicate = json!([
        {"id": TEST_OCCASION_ID, "name": "Twin A"},
        {"id": TEST_OCCASION_ID, "name": "Twin B"}
    ]);
    let resp = with_admin_auth(client.put(format!("{base_url}/api/occasions")))
        .json(&duplicate)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: Value = resp.json().await.unwrap();
    assert_eq!(error["error"], "Catalog data failed validation");

    // The stored list is untouched
    let after: Value = with_admin_auth(client.get(format!("{base_url}/api/occasions")))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(before, after);
}
