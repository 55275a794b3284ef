//! # Axum Helpers
//!
//! Utilities shared by HTTP services built on Axum.
//!
//! ## Modules
//!
//! - **[`errors`]**: Structured error responses (`AppError`, `ErrorResponse`)
//! - **[`health`]**: Health check endpoint
//! - **[`server`]**: Router composition, server bootstrap, graceful shutdown

pub mod errors;
pub mod health;
pub mod server;

pub use errors::{AppError, ErrorResponse};
pub use health::{health_handler, HealthResponse};
pub use server::{create_app, create_router, shutdown_signal};
