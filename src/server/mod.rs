//! Server module for building the HTTP service
//!
//! `ServerBuilder` wires a repository into an `OrderHandler`, exposes it over
//! REST and serves it with graceful shutdown.

pub mod builder;
pub mod exposure;

pub use builder::ServerBuilder;
pub use exposure::RestExposure;
