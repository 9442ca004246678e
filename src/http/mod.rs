//! HTTP server module
//!
//! This module handles HTTP request routing and handling:
//! - Axum router; the transcript endpoint answers on every path
//! - CORS preflight answered before routing
//! - JSON response envelope with CORS and robots headers
//! - Request logging

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::create_router;
