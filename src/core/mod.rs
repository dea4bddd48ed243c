//! Core module containing the order record, its validation rules, the
//! repository trait and the request handler

pub mod error;
pub mod handler;
pub mod order;
pub mod repository;
pub mod validation;

pub use error::{ServiceError, ServiceResult};
pub use handler::{OrderHandler, OrderOutcome};
pub use order::{Order, OrderPayload};
pub use repository::OrderRepository;
pub use validation::validate_order;
