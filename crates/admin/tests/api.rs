//! In-process tests for the admin API router.
//!
//! Each test builds the full router over a temp catalog directory and
//! drives it with `tower::ServiceExt::oneshot`, so the response contract is
//! exercised without binding a socket.

#![allow(clippy::unwrap_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use secrecy::SecretString;
use serde_json::{Value, json};
use tower::ServiceExt;

use treasured_touch_admin::config::AdminConfig;
use treasured_touch_admin::state::AppState;
use treasured_touch_catalog::CatalogStore;

fn test_app(data_dir: &std::path::Path, api_token: Option<&str>) -> Router {
    let config = AdminConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 3001,
        data_dir: data_dir.to_path_buf(),
        cors_origin: None,
        api_token: api_token.map(SecretString::from),
    };
    let state = AppState::new(config, CatalogStore::new(data_dir));
    treasured_touch_admin::app(state)
}

fn product_json(id: &str, price: u32) -> Value {
    json!({
        "id": id,
        "name": format!("Gift {id}"),
        "description": "Handcrafted",
        "price": price,
        "categoryId": "hampers",
        "image": format!("/images/{id}.jpg"),
        "featured": false,
        "inStock": true,
        "createdAt": "2025-11-02T10:00:00Z"
    })
}

fn put_products(body: &Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri("/api/products")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoints() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path(), None);

    let response = app.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/health/ready")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_replace_echoes_saved_list_and_get_reads_it_back() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path(), None);

    let body = json!([product_json("p1", 500), product_json("p2", 750)]);
    let response = app.clone().oneshot(put_products(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let saved = json_body(response).await;
    assert_eq!(saved["success"], true);
    assert_eq!(saved["message"], "Products updated successfully");
    assert_eq!(saved["data"].as_array().unwrap().len(), 2);

    let response = app.oneshot(get("/api/products")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = json_body(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 2);
    assert_eq!(listed[0]["id"], "p1");
}

#[tokio::test]
async fn test_replace_with_duplicate_ids_is_rejected_with_details() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path(), None);

    let body = json!([product_json("p1", 500), product_json("p1", 750)]);
    let response = app.clone().oneshot(put_products(&body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let error = json_body(response).await;
    assert_eq!(error["error"], "Catalog data failed validation");
    assert!(error["details"].as_str().unwrap().contains("p1"));

    // Nothing was written
    let response = app.oneshot(get("/api/products")).await.unwrap();
    assert!(json_body(response).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_negative_price_is_rejected_at_the_boundary() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path(), None);

    let mut product = product_json("p1", 0);
    product["price"] = json!(-5);
    let response = app
        .oneshot(put_products(&json!([product])))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_delete_echoes_remaining_and_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path(), None);

    let body = json!([product_json("p1", 500), product_json("p2", 750)]);
    app.clone().oneshot(put_products(&body)).await.unwrap();

    let delete = |id: &str| {
        Request::builder()
            .method("DELETE")
            .uri(format!("/api/products/{id}"))
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete("p1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let deleted = json_body(response).await;
    assert_eq!(deleted["success"], true);
    assert_eq!(deleted["data"].as_array().unwrap().len(), 1);
    assert_eq!(deleted["data"][0]["id"], "p2");

    // Deleting again succeeds and leaves the list unchanged
    let response = app.oneshot(delete("p1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let deleted = json_body(response).await;
    assert_eq!(deleted["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_categories_and_occasions_share_the_contract() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path(), None);

    let categories = json!([{"id": "hampers", "name": "Gift Hampers"}]);
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/categories")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(categories.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await["message"],
        "Categories updated successfully"
    );

    let occasions = json!([{"id": "anniversary", "name": "Anniversary"}]);
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/occasions")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(occasions.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/api/occasions")).await.unwrap();
    assert_eq!(json_body(response).await[0]["id"], "anniversary");
}

#[tokio::test]
async fn test_api_token_gates_api_routes_only() {
    let dir = tempfile::tempdir().unwrap();
    let token = "fK9mX2vQ7rT4wY8zB3nH6jL1pS5dG0aC";
    let app = test_app(dir.path(), Some(token));

    // Health stays open
    let response = app.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Missing token
    let response = app.clone().oneshot(get("/api/products")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Wrong token
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/products")
                .header(header::AUTHORIZATION, "Bearer wrong")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Right token
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/products")
                .header(header::AUTHORIZATION, format!("Bearer {token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cross_origin_requests_are_allowed_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(dir.path(), None);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/products")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
