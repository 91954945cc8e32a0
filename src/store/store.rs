//! Cache Store Module
//!
//! The storage engine: a key-value map with fixed TTL expiry, oldest-first
//! capacity eviction, and miss-fill reads.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{CacheError, Result};
use crate::store::record::current_timestamp_ms;
use crate::store::{InsertOrder, Record, StoreStats, MAX_KEY_LENGTH};

// == Store ==
/// Authoritative key-value store with TTL expiry and a capacity bound.
///
/// All records share one TTL fixed at construction. Expiry is enforced
/// lazily on every read and scan, and proactively by the background sweep
/// calling [`Store::purge_expired`]. When the store is at capacity, writing
/// a new key evicts the earliest-arrived live record first; updates do not
/// change a record's place in the eviction queue.
#[derive(Debug)]
pub struct Store {
    /// Key-value storage
    entries: HashMap<String, Record>,
    /// Key ordering: write recency for listing, arrival order for eviction
    order: InsertOrder,
    /// Activity counters
    stats: StoreStats,
    /// Maximum number of records allowed
    max_entries: usize,
    /// Shared time-to-live in milliseconds
    ttl_ms: u64,
}

impl Store {
    // == Constructor ==
    /// Creates a new Store.
    ///
    /// A capacity of zero is clamped to one; a store must be able to hold
    /// the record it is asked to write.
    ///
    /// # Arguments
    /// * `max_entries` - Maximum number of records the store can hold
    /// * `ttl_secs` - Time-to-live applied to every record, in seconds
    pub fn new(max_entries: usize, ttl_secs: u64) -> Self {
        Self {
            entries: HashMap::new(),
            order: InsertOrder::new(),
            stats: StoreStats::new(),
            max_entries: max_entries.max(1),
            ttl_ms: ttl_secs.saturating_mul(1000),
        }
    }

    // == Put ==
    /// Inserts or replaces the record for `key`, refreshing its insertion
    /// time, and returns the stored value.
    ///
    /// The key is trimmed before use and must be 1..=100 characters
    /// afterwards. An update takes the most-recent position in the write
    /// order but keeps its original arrival slot for eviction. If the
    /// store is at capacity and the key is new, expired records are
    /// purged first and the earliest-arrived live record is evicted if
    /// room is still needed.
    pub fn put(&mut self, key: &str, value: Value) -> Result<Value> {
        let key = normalize_key(key)?;

        let is_new = !self.entries.contains_key(&key);
        if is_new && self.entries.len() >= self.max_entries {
            // Expired records go first; only evict live ones if that wasn't enough
            self.purge_expired();
            while self.entries.len() >= self.max_entries {
                match self.order.evict_oldest() {
                    Some(evicted) => {
                        self.entries.remove(&evicted);
                        self.stats.record_eviction();
                    }
                    None => break,
                }
            }
        }

        self.entries.insert(key.clone(), Record::new(value.clone()));
        self.order.record_write(&key);
        self.stats.set_total_entries(self.entries.len());

        Ok(value)
    }

    // == Get ==
    /// Returns the value for `key` if a live record exists.
    ///
    /// An expired-but-unpurged record is a miss and is removed on sight.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        let key = key.trim();

        if let Some(record) = self.entries.get(key) {
            if !record.is_expired(self.ttl_ms) {
                let value = record.value.clone();
                self.stats.record_hit();
                return Some(value);
            }
            // Expired: purge opportunistically, then fall through to a miss
            self.entries.remove(key);
            self.order.remove(key);
            self.stats.record_expired(1);
            self.stats.set_total_entries(self.entries.len());
        }

        self.stats.record_miss();
        None
    }

    // == Get Or Fill ==
    /// Returns the live value for `key`, or fills the miss.
    ///
    /// On a miss, `fill` produces a value that is stored under `key` and
    /// returned. The boolean is `true` when the value was just created.
    ///
    /// Callers serialize access through the store's lock, so the miss-check
    /// and the fill-insert form a single critical section; concurrent reads
    /// of the same absent key observe exactly one winning fill.
    pub fn get_or_fill<F>(&mut self, key: &str, fill: F) -> Result<(Value, bool)>
    where
        F: FnOnce() -> Value,
    {
        if let Some(value) = self.get(key) {
            return Ok((value, false));
        }

        let value = self.put(key, fill())?;
        self.stats.record_fill();
        Ok((value, true))
    }

    // == Keys ==
    /// Returns all live keys in write order (oldest first).
    ///
    /// Expired records encountered during the scan are purged.
    pub fn keys(&mut self) -> Vec<String> {
        let now = current_timestamp_ms();
        let expired: Vec<String> = self
            .order
            .iter()
            .filter(|key| {
                self.entries
                    .get(key.as_str())
                    .map_or(true, |record| record.is_expired_at(now, self.ttl_ms))
            })
            .cloned()
            .collect();

        if !expired.is_empty() {
            for key in &expired {
                self.entries.remove(key);
                self.order.remove(key);
            }
            self.stats.record_expired(expired.len() as u64);
            self.stats.set_total_entries(self.entries.len());
        }

        self.order.iter().cloned().collect()
    }

    // == Delete ==
    /// Removes the record for `key` if present; returns whether anything
    /// was removed. Absent keys are not an error.
    pub fn delete(&mut self, key: &str) -> bool {
        let key = key.trim();
        if self.entries.remove(key).is_some() {
            self.order.remove(key);
            self.stats.set_total_entries(self.entries.len());
            true
        } else {
            false
        }
    }

    // == Delete All ==
    /// Removes every live record and returns how many were removed.
    ///
    /// Expired leftovers are purged first so they count as expirations,
    /// not deletions.
    pub fn delete_all(&mut self) -> usize {
        self.purge_expired();
        let count = self.entries.len();
        self.entries.clear();
        self.order.clear();
        self.stats.set_total_entries(0);
        count
    }

    // == Purge Expired ==
    /// Removes all expired records and returns how many were purged.
    ///
    /// Called by the background sweep; reads and scans also purge lazily.
    pub fn purge_expired(&mut self) -> usize {
        let now = current_timestamp_ms();
        let expired: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, record)| record.is_expired_at(now, self.ttl_ms))
            .map(|(key, _)| key.clone())
            .collect();

        let count = expired.len();
        for key in &expired {
            self.entries.remove(key);
            self.order.remove(key);
        }

        if count > 0 {
            self.stats.record_expired(count as u64);
            self.stats.set_total_entries(self.entries.len());
        }

        count
    }

    // == Stats ==
    /// Returns a snapshot of the store's activity counters.
    pub fn stats(&self) -> StoreStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of records, expired leftovers included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Key Normalization ==
/// Trims the key and enforces the 1..=100 character constraint.
fn normalize_key(key: &str) -> Result<String> {
    let key = key.trim();
    if key.is_empty() {
        return Err(CacheError::InvalidKey(
            "key must not be empty after trimming".to_string(),
        ));
    }
    if key.chars().count() > MAX_KEY_LENGTH {
        return Err(CacheError::InvalidKey(format!(
            "key exceeds maximum length of {} characters",
            MAX_KEY_LENGTH
        )));
    }
    Ok(key.to_string())
}
