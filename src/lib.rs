//! # Order Service
//!
//! A small CRUD HTTP service for customer orders.
//!
//! ## Features
//!
//! - **Validated input**: every create and update runs the full rule set and
//!   reports all violations at once
//! - **Pluggable storage**: the handler only sees the `OrderRepository`
//!   trait; an in-memory store ships by default and PostgreSQL sits behind
//!   the `postgres` feature
//! - **Explicit outcomes**: handler results are an enum that the REST layer
//!   maps to status codes
//! - **YAML configuration** with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use orders::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_repository(InMemoryOrderRepository::new())
//!         .serve("127.0.0.1:8080")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ConfigError, RequestError, ServiceError, ServiceResult, StorageError},
        handler::{OrderHandler, OrderOutcome},
        order::{Order, OrderPayload},
        repository::OrderRepository,
        validation::validate_order,
    };

    // === Storage ===
    pub use crate::storage::InMemoryOrderRepository;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresOrderRepository;

    // === Config ===
    pub use crate::config::{ServiceConfig, StorageBackend};

    // === Server ===
    pub use crate::server::{RestExposure, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use serde::{Deserialize, Serialize};
}
