//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_handler, config_handler, data_handler, health_handler, state_handler, stats_handler,
    AppState,
};
use crate::source::DataSource;

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin (the inspection frontend is served separately)
/// - Tracing: Logs all requests for debugging
pub fn create_router<S: DataSource>(state: AppState<S>) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/api/data/:key", get(data_handler::<S>))
        .route("/cache/state", get(state_handler::<S>))
        .route("/cache/stats", get(stats_handler::<S>))
        .route("/cache/config", post(config_handler::<S>))
        .route("/cache", delete(clear_handler::<S>))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
