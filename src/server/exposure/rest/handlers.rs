//! HTTP handlers for order operations
//!
//! Handlers decode the request, delegate to `OrderHandler` and let
//! `OrderOutcome` / `ServiceError` turn themselves into responses.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::core::error::{RequestError, ServiceError, ServiceResult};
use crate::core::{OrderHandler, OrderOutcome, OrderPayload};

/// POST /orders
pub async fn create_order(
    State(handler): State<OrderHandler>,
    payload: Result<Json<OrderPayload>, JsonRejection>,
) -> ServiceResult<OrderOutcome> {
    let Json(payload) = payload.map_err(invalid_json)?;
    handler.create(payload).await
}

/// GET /orders
pub async fn list_orders(State(handler): State<OrderHandler>) -> ServiceResult<OrderOutcome> {
    handler.list().await
}

/// GET /orders/{id}
pub async fn get_order(
    State(handler): State<OrderHandler>,
    Path(id): Path<String>,
) -> ServiceResult<OrderOutcome> {
    handler.get(parse_id(&id)?).await
}

/// PUT /orders/{id}
pub async fn update_order(
    State(handler): State<OrderHandler>,
    Path(id): Path<String>,
    payload: Result<Json<OrderPayload>, JsonRejection>,
) -> ServiceResult<OrderOutcome> {
    let id = parse_id(&id)?;
    let Json(payload) = payload.map_err(invalid_json)?;
    handler.update(id, payload).await
}

/// DELETE /orders/{id}
pub async fn delete_order(
    State(handler): State<OrderHandler>,
    Path(id): Path<String>,
) -> ServiceResult<OrderOutcome> {
    handler.delete(parse_id(&id)?).await
}

fn parse_id(raw: &str) -> Result<i64, ServiceError> {
    raw.parse::<i64>().map_err(|e| {
        RequestError::InvalidPath {
            path: format!("/orders/{}", raw),
            message: e.to_string(),
        }
        .into()
    })
}

fn invalid_json(rejection: JsonRejection) -> ServiceError {
    RequestError::InvalidJson {
        message: rejection.body_text(),
    }
    .into()
}

impl IntoResponse for OrderOutcome {
    fn into_response(self) -> Response {
        match self {
            OrderOutcome::ValidationFailed(errors) => {
                (StatusCode::BAD_REQUEST, Json(errors)).into_response()
            }
            OrderOutcome::NotFound => StatusCode::NOT_FOUND.into_response(),
            OrderOutcome::Created(order) => (StatusCode::CREATED, Json(order)).into_response(),
            OrderOutcome::Found(order) | OrderOutcome::Updated(order) => {
                (StatusCode::OK, Json(order)).into_response()
            }
            OrderOutcome::Listed(orders) => (StatusCode::OK, Json(orders)).into_response(),
            OrderOutcome::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}
