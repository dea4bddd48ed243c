//! REST API exposure for the order service
//!
//! This module provides REST-specific routing and handlers. The handler core
//! stays protocol-agnostic; this layer only decodes requests and maps
//! outcomes to status codes.
//!
//! ```text
//! POST   /orders        → create_order   201 | 400
//! GET    /orders        → list_orders    200
//! GET    /orders/{id}   → get_order      200 | 404
//! PUT    /orders/{id}   → update_order   200 | 400 | 404
//! DELETE /orders/{id}   → delete_order   204 | 404
//! ```

pub mod handlers;

use crate::core::OrderHandler;
use axum::{Json, Router, routing::get};
use handlers::{create_order, delete_order, get_order, list_orders, update_order};
use serde_json::{Value, json};

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router
    ///
    /// Returns a router with the health check, the order CRUD routes and any
    /// custom routes merged in.
    pub fn build_router(handler: OrderHandler, custom_routes: Vec<Router>) -> Router {
        let mut app = Self::health_routes().merge(Self::order_routes(handler));

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        app
    }

    /// Order CRUD routes
    pub fn order_routes(handler: OrderHandler) -> Router {
        Router::new()
            .route("/orders", get(list_orders).post(create_order))
            .route(
                "/orders/{id}",
                get(get_order).put(update_order).delete(delete_order),
            )
            .with_state(handler)
    }

    fn health_routes() -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
    }

    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "order-service"
        }))
    }
}
