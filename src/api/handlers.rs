//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::{CacheKey, CacheStore};
use crate::error::{CacheError, Result};
use crate::models::{
    ClearResponse, DeleteResponse, ExistsResponse, GetResponse, HealthResponse, SetRequest,
    SetResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// The engine's structures are one shared mutable resource; the lock is
/// held for the whole of each logical operation (including budget
/// enforcement and sweep passes), so the entry table and recency list
/// are never observed in a partially-synchronized state.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache store
    pub cache: Arc<RwLock<CacheStore>>,
}

impl AppState {
    /// Creates a new AppState with the given cache store.
    pub fn new(cache: CacheStore) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(CacheStore::new(config.max_bytes))
    }
}

/// Handler for PUT /cache/:namespace/:key
///
/// Stores a value with optional TTL in milliseconds. The value may be a
/// JSON string (stored as raw UTF-8) or any structured JSON value
/// (serialized before storage).
pub async fn set_handler(
    State(state): State<AppState>,
    Path((namespace, key)): Path<(String, String)>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let bytes = req.value_bytes();
    let size = bytes.len();

    let mut cache = state.cache.write().await;
    cache.set(CacheKey::new(namespace.clone(), key.clone()), bytes, req.ttl_ms);

    Ok(Json(SetResponse::new(namespace, key, size)))
}

/// Handler for GET /cache/:namespace/:key
///
/// Retrieves a value. Absent and expired keys are both 404; the stored
/// bytes are presented as structured JSON when they round-trip, else as
/// a string.
pub async fn get_handler(
    State(state): State<AppState>,
    Path((namespace, key)): Path<(String, String)>,
) -> Result<Json<GetResponse>> {
    let cache_key = CacheKey::new(namespace.clone(), key.clone());

    // Write lock: a hit promotes recency
    let mut cache = state.cache.write().await;
    let value = cache
        .get(&cache_key)
        .ok_or_else(|| CacheError::NotFound(cache_key.to_string()))?;

    Ok(Json(GetResponse::from_bytes(namespace, key, &value)))
}

/// Handler for GET /cache/:namespace/:key/exists
///
/// Existence check; performs lazy expiry like a read but never counts
/// as usage for recency purposes.
pub async fn exists_handler(
    State(state): State<AppState>,
    Path((namespace, key)): Path<(String, String)>,
) -> Json<ExistsResponse> {
    let cache_key = CacheKey::new(namespace.clone(), key.clone());

    // Write lock: lazy expiry may remove the entry
    let mut cache = state.cache.write().await;
    let exists = cache.has(&cache_key);

    Json(ExistsResponse::new(namespace, key, exists))
}

/// Handler for DELETE /cache/:namespace/:key
///
/// Idempotent: deleting an absent key reports `deleted: false` with
/// status 200 and no side effects.
pub async fn delete_handler(
    State(state): State<AppState>,
    Path((namespace, key)): Path<(String, String)>,
) -> Json<DeleteResponse> {
    let cache_key = CacheKey::new(namespace.clone(), key.clone());

    let mut cache = state.cache.write().await;
    let deleted = cache.delete(&cache_key);

    Json(DeleteResponse::new(namespace, key, deleted))
}

/// Handler for DELETE /cache/:namespace
///
/// Removes every entry in the namespace; other namespaces are untouched.
pub async fn clear_namespace_handler(
    State(state): State<AppState>,
    Path(namespace): Path<String>,
) -> Json<ClearResponse> {
    let mut cache = state.cache.write().await;
    let removed = cache.clear_namespace(&namespace);

    Json(ClearResponse::new(namespace, removed))
}

/// Handler for GET /stats
///
/// Returns current cache statistics. Pure read, no mutation.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::from_stats(&stats))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_state() -> AppState {
        AppState::new(CacheStore::new(1024))
    }

    fn set_req(value: serde_json::Value, ttl_ms: Option<u64>) -> SetRequest {
        SetRequest { value, ttl_ms }
    }

    #[tokio::test]
    async fn test_set_and_get_handler() {
        let state = test_state();

        let result = set_handler(
            State(state.clone()),
            Path(("ns".to_string(), "test_key".to_string())),
            Json(set_req(json!("test_value"), None)),
        )
        .await;
        assert!(result.is_ok());

        let result = get_handler(
            State(state.clone()),
            Path(("ns".to_string(), "test_key".to_string())),
        )
        .await;
        let response = result.unwrap();
        assert_eq!(response.value, json!("test_value"));
    }

    #[tokio::test]
    async fn test_structured_value_round_trip() {
        let state = test_state();

        set_handler(
            State(state.clone()),
            Path(("ns".to_string(), "obj".to_string())),
            Json(set_req(json!({"a": 1}), None)),
        )
        .await
        .unwrap();

        let response = get_handler(
            State(state.clone()),
            Path(("ns".to_string(), "obj".to_string())),
        )
        .await
        .unwrap();
        assert_eq!(response.value, json!({"a": 1}));
    }

    #[tokio::test]
    async fn test_get_nonexistent_key() {
        let state = test_state();

        let result = get_handler(
            State(state),
            Path(("ns".to_string(), "nonexistent".to_string())),
        )
        .await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_exists_handler_does_not_promote() {
        // Budget for exactly two 5-byte values
        let state = AppState::new(CacheStore::new(10));

        for k in ["a", "b"] {
            set_handler(
                State(state.clone()),
                Path(("ns".to_string(), k.to_string())),
                Json(set_req(json!("12345"), None)),
            )
            .await
            .unwrap();
        }

        // Existence check on "a" must not rescue it from eviction
        let resp = exists_handler(
            State(state.clone()),
            Path(("ns".to_string(), "a".to_string())),
        )
        .await;
        assert!(resp.exists);

        set_handler(
            State(state.clone()),
            Path(("ns".to_string(), "c".to_string())),
            Json(set_req(json!("1"), None)),
        )
        .await
        .unwrap();

        let a = exists_handler(
            State(state.clone()),
            Path(("ns".to_string(), "a".to_string())),
        )
        .await;
        let b = exists_handler(
            State(state.clone()),
            Path(("ns".to_string(), "b".to_string())),
        )
        .await;
        assert!(!a.exists);
        assert!(b.exists);
    }

    #[tokio::test]
    async fn test_delete_handler_idempotent() {
        let state = test_state();

        set_handler(
            State(state.clone()),
            Path(("ns".to_string(), "to_delete".to_string())),
            Json(set_req(json!("value"), None)),
        )
        .await
        .unwrap();

        let resp = delete_handler(
            State(state.clone()),
            Path(("ns".to_string(), "to_delete".to_string())),
        )
        .await;
        assert!(resp.deleted);

        // Second delete is a no-op, not an error
        let resp = delete_handler(
            State(state.clone()),
            Path(("ns".to_string(), "to_delete".to_string())),
        )
        .await;
        assert!(!resp.deleted);
    }

    #[tokio::test]
    async fn test_clear_namespace_handler() {
        let state = test_state();

        for (ns, k) in [("ns1", "a"), ("ns1", "b"), ("ns2", "a")] {
            set_handler(
                State(state.clone()),
                Path((ns.to_string(), k.to_string())),
                Json(set_req(json!("v"), None)),
            )
            .await
            .unwrap();
        }

        let resp = clear_namespace_handler(State(state.clone()), Path("ns1".to_string())).await;
        assert_eq!(resp.removed, 2);

        let other = exists_handler(
            State(state.clone()),
            Path(("ns2".to_string(), "a".to_string())),
        )
        .await;
        assert!(other.exists);
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state();

        let response = stats_handler(State(state)).await;
        assert_eq!(response.entries, 0);
        assert_eq!(response.used_bytes, 0);
        assert_eq!(response.max_bytes, 1024);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[tokio::test]
    async fn test_set_invalid_request() {
        let state = test_state();

        let result = set_handler(
            State(state),
            Path(("ns".to_string(), "k".to_string())),
            Json(set_req(json!(null), None)),
        )
        .await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }
}
