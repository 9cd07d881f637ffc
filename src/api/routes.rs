//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{
    routing::{delete, get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    clear_namespace_handler, delete_handler, exists_handler, get_handler, health_handler,
    set_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `PUT /cache/:namespace/:key` - Store a value with optional TTL
/// - `GET /cache/:namespace/:key` - Retrieve a value
/// - `GET /cache/:namespace/:key/exists` - Existence check
/// - `DELETE /cache/:namespace/:key` - Delete a key
/// - `DELETE /cache/:namespace` - Clear a whole namespace
/// - `GET /stats` - Get cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route(
            "/cache/:namespace/:key",
            put(set_handler).get(get_handler).delete(delete_handler),
        )
        .route("/cache/:namespace/:key/exists", get(exists_handler))
        .route("/cache/:namespace", delete(clear_namespace_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
