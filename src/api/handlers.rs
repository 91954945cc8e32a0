//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::debug;

use crate::error::{CacheError, Result};
use crate::models::{
    DeleteAllResponse, DeleteKeyResponse, HealthResponse, PutRequest, StatsResponse,
};
use crate::store::{random_string, Store, DEFAULT_FILL_LEN};

/// Application state shared across all handlers.
///
/// Holds the store behind an Arc<RwLock<>>. Every mutating path takes the
/// write lock, so compound operations like the miss-fill read run as one
/// critical section.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache store
    pub store: Arc<RwLock<Store>>,
}

impl AppState {
    /// Creates a new AppState owning the given store.
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let store = Store::new(config.max_entries, config.ttl_secs);
        Self::new(store)
    }
}

/// Handler for POST /cache
///
/// Creates or updates the record for a key and returns the stored value.
pub async fn put_handler(
    State(state): State<AppState>,
    Json(req): Json<PutRequest>,
) -> Result<Json<Value>> {
    // Reject malformed requests before touching the store
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::Validation(error_msg));
    }
    let key = req.key.unwrap_or_default();
    let data = req.data.unwrap_or(Value::Null);

    let mut store = state.store.write().await;
    let stored = store.put(&key, data)?;

    Ok(Json(stored))
}

/// Handler for GET /cache
///
/// Returns all live keys in insertion order.
pub async fn keys_handler(State(state): State<AppState>) -> Json<Vec<String>> {
    // Write lock: listing purges expired records it encounters
    let mut store = state.store.write().await;
    Json(store.keys())
}

/// Handler for GET /cache/:key
///
/// Returns the cached value for a key. On a miss, stores a freshly
/// generated random string under the key and returns it with 201.
pub async fn read_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<(StatusCode, Json<Value>)> {
    let mut store = state.store.write().await;
    let (value, created) =
        store.get_or_fill(&key, || json!(random_string(DEFAULT_FILL_LEN)))?;

    if created {
        debug!(%key, "cache miss, filled with generated value");
        Ok((StatusCode::CREATED, Json(value)))
    } else {
        debug!(%key, "cache hit");
        Ok((StatusCode::OK, Json(value)))
    }
}

/// Handler for DELETE /cache/:key
///
/// Removes a key. The confirmation is sent whether or not the key existed.
pub async fn delete_key_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<DeleteKeyResponse> {
    let mut store = state.store.write().await;
    let removed = store.delete(&key);
    debug!(%key, removed, "delete request handled");

    Json(DeleteKeyResponse::new(key))
}

/// Handler for DELETE /cache
///
/// Removes every key and reports how many live records were dropped.
pub async fn delete_all_handler(State(state): State<AppState>) -> Json<DeleteAllResponse> {
    let mut store = state.store.write().await;
    let removed = store.delete_all();

    Json(DeleteAllResponse::new(removed))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let store = state.store.read().await;
    let stats = store.stats();

    Json(StatsResponse::from_stats(&stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
