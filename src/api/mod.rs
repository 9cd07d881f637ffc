//! API Module
//!
//! HTTP handlers and routing for the cache server REST API.
//!
//! # Endpoints
//! - `PUT /cache/:namespace/:key` - Store a value with optional TTL
//! - `GET /cache/:namespace/:key` - Retrieve a value
//! - `GET /cache/:namespace/:key/exists` - Existence check (never promotes recency)
//! - `DELETE /cache/:namespace/:key` - Delete a key
//! - `DELETE /cache/:namespace` - Clear a whole namespace
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
