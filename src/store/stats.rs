//! Store Statistics Module
//!
//! Tracks hits, misses, miss-fills, capacity evictions, and expiry purges.

use serde::Serialize;

// == Store Stats ==
/// Counters describing store activity since startup.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StoreStats {
    /// Reads that found a live record
    pub hits: u64,
    /// Reads that found nothing (absent or expired)
    pub misses: u64,
    /// Misses that were filled with a generated value
    pub fills: u64,
    /// Records removed to make room at capacity
    pub evictions: u64,
    /// Records removed because their TTL elapsed
    pub expired: u64,
    /// Current number of records in the store
    pub total_entries: usize,
}

impl StoreStats {
    // == Constructor ==
    /// Creates a new StoreStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 before any reads.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_fill(&mut self) {
        self.fills += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Counts `count` TTL-expired removals in one bump.
    pub fn record_expired(&mut self, count: u64) {
        self.expired += count;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
