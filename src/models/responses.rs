//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies. Write and read
//! endpoints return the stored value itself; these types cover the rest.

use serde::Serialize;

/// Response body for DELETE /cache/:key
#[derive(Debug, Clone, Serialize)]
pub struct DeleteKeyResponse {
    /// Human-readable confirmation
    pub message: String,
    /// The key the delete targeted
    pub key: String,
}

impl DeleteKeyResponse {
    /// Creates the confirmation for a single-key delete.
    ///
    /// Sent whether or not the key existed.
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key {} was removed", key),
            key,
        }
    }
}

/// Response body for DELETE /cache
#[derive(Debug, Clone, Serialize)]
pub struct DeleteAllResponse {
    /// Human-readable confirmation
    pub message: String,
    /// Number of live records removed
    pub removed: usize,
}

impl DeleteAllResponse {
    /// Creates the confirmation for a bulk delete.
    pub fn new(removed: usize) -> Self {
        Self {
            message: "All keys were removed".to_string(),
            removed,
        }
    }
}

/// Response body for GET /stats
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Reads that found a live record
    pub hits: u64,
    /// Reads that found nothing
    pub misses: u64,
    /// Misses filled with a generated value
    pub fills: u64,
    /// Records evicted at capacity
    pub evictions: u64,
    /// Records removed by TTL expiry
    pub expired: u64,
    /// Current number of records
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a StatsResponse from a store snapshot.
    pub fn from_stats(stats: &crate::store::StoreStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            fills: stats.fills,
            evictions: stats.evictions,
            expired: stats.expired,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
