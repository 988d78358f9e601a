//! API Module
//!
//! HTTP handlers and routing for the cache server REST API.
//!
//! # Endpoints
//! - `GET /api/data/:key` - Read-through lookup
//! - `GET /cache/state` - Cached entries, most recent first
//! - `GET /cache/stats` - Get cache statistics
//! - `POST /cache/config` - Change capacity (resets the cache)
//! - `DELETE /cache` - Clear the cache
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
