//! REST integration test macro for storage backends.
//!
//! The `rest_integration_tests!` macro generates HTTP-level tests that run
//! the order CRUD scenarios against a real repository:
//! JSON → HTTP request → handler → OrderRepository → HTTP response → JSON.
//!
//! # Generated Tests
//!
//! - `test_rest_create`: POST 201 + submitted fields + fresh id
//! - `test_rest_create_then_get`: GET returns what was submitted
//! - `test_rest_list`: GET /orders returns every order
//! - `test_rest_update`: PUT 200, id kept even if the body carries another
//! - `test_rest_delete`: DELETE 204, then GET 404
//! - `test_rest_delete_missing`: DELETE unknown id → 404, nothing removed
//! - `test_rest_invalid_update_of_missing_order`: validation wins over 404

/// Generate a REST integration test suite for a storage backend.
///
/// `$repo_factory` must produce an `impl OrderRepository + 'static`.
#[macro_export]
macro_rules! rest_integration_tests {
    ($repo_factory:expr) => {
        mod rest_integration_tests {
            use super::*;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use orders::core::OrderRepository;
            use serde_json::{Value, json};
            use std::sync::Arc;

            async fn make_server() -> TestServer {
                let repository: Arc<dyn OrderRepository> = Arc::new($repo_factory);
                storage_harness::integration::build_test_server(repository)
            }

            async fn create(server: &TestServer, body: Value) -> Value {
                let response = server.post("/orders").json(&body).await;
                response.assert_status(StatusCode::CREATED);
                response.json()
            }

            #[tokio::test]
            async fn test_rest_create() {
                let server = make_server().await;

                let body = create(
                    &server,
                    json!({
                        "customerName": "Test Name",
                        "orderDate": "2023-07-06",
                        "shippingAddress": "123 Main St",
                        "total": 50.0
                    }),
                )
                .await;

                assert!(body["id"].as_i64().is_some());
                assert_eq!(body["customerName"], "Test Name");
                assert_eq!(body["orderDate"], "2023-07-06");
                assert_eq!(body["shippingAddress"], "123 Main St");
                assert_eq!(body["total"], 50.0);
            }

            #[tokio::test]
            async fn test_rest_create_then_get() {
                let server = make_server().await;

                let created = create(
                    &server,
                    json!({
                        "customerName": "Test Name",
                        "shippingAddress": "123 Main St",
                        "total": 12.5
                    }),
                )
                .await;
                let id = created["id"].as_i64().unwrap();

                let response = server.get(&format!("/orders/{}", id)).await;
                response.assert_status_ok();

                let body: Value = response.json();
                assert_eq!(body, created);
                assert!(body["orderDate"].is_null());
            }

            #[tokio::test]
            async fn test_rest_list() {
                let server = make_server().await;

                let empty: Value = server.get("/orders").await.json();
                assert_eq!(empty, json!([]));

                for name in ["Alice", "Bob"] {
                    create(
                        &server,
                        json!({"customerName": name, "shippingAddress": "1 Road", "total": 5.0}),
                    )
                    .await;
                }

                let response = server.get("/orders").await;
                response.assert_status_ok();
                let body: Value = response.json();
                let names: Vec<&str> = body
                    .as_array()
                    .unwrap()
                    .iter()
                    .map(|o| o["customerName"].as_str().unwrap())
                    .collect();
                assert_eq!(names.len(), 2);
                assert!(names.contains(&"Alice"));
                assert!(names.contains(&"Bob"));
            }

            #[tokio::test]
            async fn test_rest_update() {
                let server = make_server().await;

                let created = create(
                    &server,
                    json!({
                        "customerName": "Test Name",
                        "orderDate": "2023-07-06",
                        "shippingAddress": "123 Main st",
                        "total": 50.0
                    }),
                )
                .await;
                let id = created["id"].as_i64().unwrap();

                let response = server
                    .put(&format!("/orders/{}", id))
                    .json(&json!({
                        "id": id + 1000,
                        "customerName": "John Doe",
                        "orderDate": "2023-07-07",
                        "shippingAddress": "999 Second st",
                        "total": 100.0
                    }))
                    .await;

                response.assert_status_ok();
                let body: Value = response.json();
                assert_eq!(body["id"], id);
                assert_eq!(body["customerName"], "John Doe");
                assert_eq!(body["orderDate"], "2023-07-07");
                assert_eq!(body["total"], 100.0);

                let fetched: Value = server.get(&format!("/orders/{}", id)).await.json();
                assert_eq!(fetched, body);
            }

            #[tokio::test]
            async fn test_rest_delete() {
                let server = make_server().await;

                let created = create(
                    &server,
                    json!({"customerName": "Test Name", "shippingAddress": "123 Main st", "total": 50.0}),
                )
                .await;
                let id = created["id"].as_i64().unwrap();

                let response = server.delete(&format!("/orders/{}", id)).await;
                response.assert_status(StatusCode::NO_CONTENT);
                assert!(response.as_bytes().is_empty());

                let response = server.get(&format!("/orders/{}", id)).await;
                response.assert_status_not_found();
                assert!(response.as_bytes().is_empty());
            }

            #[tokio::test]
            async fn test_rest_delete_missing() {
                let server = make_server().await;

                create(
                    &server,
                    json!({"customerName": "Keep Me", "shippingAddress": "1 Road", "total": 1.0}),
                )
                .await;

                let response = server.delete("/orders/999999").await;
                response.assert_status_not_found();

                let body: Value = server.get("/orders").await.json();
                assert_eq!(body.as_array().unwrap().len(), 1);
            }

            #[tokio::test]
            async fn test_rest_invalid_update_of_missing_order() {
                let server = make_server().await;

                let response = server
                    .put("/orders/999999")
                    .json(&json!({"customerName": "", "shippingAddress": "1 Road", "total": -1.0}))
                    .await;

                response.assert_status_bad_request();
                let errors: Vec<String> = response.json();
                assert!(errors.contains(&"Customer name cannot be empty".to_string()));
                assert!(errors.contains(&"Total cannot be negative".to_string()));
            }
        }
    };
}
