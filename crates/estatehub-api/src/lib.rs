//! # estatehub-api
//!
//! HTTP API layer for the EstateHub admin backend, built on Axum.
//!
//! Provides the auth and admin endpoints, the request authorization
//! filter, CORS and logging middleware, DTOs, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
