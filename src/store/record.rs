//! Cache Record Module
//!
//! Defines the stored record: an opaque JSON value plus its insertion time.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

// == Record ==
/// A single stored key's payload and metadata.
///
/// The key itself lives in the store map; the record carries the opaque
/// value and the insertion timestamp that governs expiry. Every write
/// (create or update) produces a fresh `inserted_at`.
#[derive(Debug, Clone)]
pub struct Record {
    /// The stored value (arbitrary JSON)
    pub value: Value,
    /// Insertion timestamp (Unix milliseconds), refreshed on every write
    pub inserted_at: u64,
}

impl Record {
    // == Constructor ==
    /// Creates a record stamped with the current time.
    pub fn new(value: Value) -> Self {
        Self {
            value,
            inserted_at: current_timestamp_ms(),
        }
    }

    // == Is Expired ==
    /// Checks whether the record has outlived the given TTL.
    ///
    /// Boundary condition: a record is expired when the current time is
    /// greater than or equal to `inserted_at + ttl_ms`, so a record whose
    /// TTL has fully elapsed is expired immediately.
    pub fn is_expired(&self, ttl_ms: u64) -> bool {
        self.is_expired_at(current_timestamp_ms(), ttl_ms)
    }

    /// Expiry check against an externally sampled clock value.
    ///
    /// Scans over many records sample the clock once and reuse it here.
    pub fn is_expired_at(&self, now_ms: u64, ttl_ms: u64) -> bool {
        now_ms >= self.inserted_at.saturating_add(ttl_ms)
    }

    // == Remaining ==
    /// Milliseconds until expiry, or 0 if already expired.
    #[allow(dead_code)]
    pub fn remaining_ms(&self, ttl_ms: u64) -> u64 {
        let deadline = self.inserted_at.saturating_add(ttl_ms);
        deadline.saturating_sub(current_timestamp_ms())
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
