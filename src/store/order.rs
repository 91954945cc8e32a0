//! Insertion Order Module
//!
//! Tracks two key orderings: write recency for listing, and original
//! arrival order for capacity eviction.

use std::collections::VecDeque;

// == Insert Order ==
/// Tracks the ordering of keys in the store.
///
/// Two sequences are kept, front = oldest in both:
/// - `writes`: ordered by most recent write. A rewrite of an existing key
///   moves it to the back, matching its refreshed insertion timestamp.
///   Drives key listing.
/// - `arrivals`: ordered by when each key first entered the store.
///   Rewrites do not reorder it, matching capped-collection semantics
///   where in-place updates keep a document's slot. Drives eviction.
///
/// Reads never reorder keys. A key deleted or evicted and later written
/// again arrives anew in both sequences.
#[derive(Debug, Default)]
pub struct InsertOrder {
    /// Keys ordered by their current record's write time
    writes: VecDeque<String>,
    /// Keys ordered by first insertion, unmoved by rewrites
    arrivals: VecDeque<String>,
}

impl InsertOrder {
    // == Constructor ==
    /// Creates a new empty order tracker.
    pub fn new() -> Self {
        Self {
            writes: VecDeque::new(),
            arrivals: VecDeque::new(),
        }
    }

    // == Record Write ==
    /// Marks a key as just written.
    ///
    /// The key takes the most-recent position in the write sequence. Its
    /// arrival position is recorded only if the key is new; an update
    /// keeps the original slot.
    pub fn record_write(&mut self, key: &str) {
        self.writes.retain(|k| k != key);
        self.writes.push_back(key.to_string());

        if !self.arrivals.iter().any(|k| k == key) {
            self.arrivals.push_back(key.to_string());
        }
    }

    // == Remove ==
    /// Removes a key from both sequences.
    pub fn remove(&mut self, key: &str) {
        self.writes.retain(|k| k != key);
        self.arrivals.retain(|k| k != key);
    }

    // == Evict Oldest ==
    /// Returns and removes the earliest-arrived key.
    ///
    /// Returns None if the tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        let key = self.arrivals.pop_front()?;
        self.writes.retain(|k| k != &key);
        Some(key)
    }

    // == Peek Oldest ==
    /// Returns the earliest-arrived key without removing it.
    #[allow(dead_code)]
    pub fn peek_oldest(&self) -> Option<&String> {
        self.arrivals.front()
    }

    // == Iterate ==
    /// Iterates keys by write order, oldest write first.
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.writes.iter()
    }

    // == Clear ==
    /// Drops every tracked key.
    pub fn clear(&mut self) {
        self.writes.clear();
        self.arrivals.clear();
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.writes.len()
    }

    // == Is Empty ==
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    #[allow(dead_code)]
    pub fn contains(&self, key: &str) -> bool {
        self.writes.iter().any(|k| k == key)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_new() {
        let order = InsertOrder::new();
        assert!(order.is_empty());
        assert_eq!(order.len(), 0);
        assert_eq!(order.peek_oldest(), None);
    }

    #[test]
    fn test_order_tracks_write_sequence() {
        let mut order = InsertOrder::new();

        order.record_write("key1");
        order.record_write("key2");
        order.record_write("key3");

        assert_eq!(order.len(), 3);
        assert_eq!(order.peek_oldest(), Some(&"key1".to_string()));

        let keys: Vec<&String> = order.iter().collect();
        assert_eq!(keys, vec!["key1", "key2", "key3"]);
    }

    #[test]
    fn test_order_rewrite_moves_write_position_only() {
        let mut order = InsertOrder::new();

        order.record_write("key1");
        order.record_write("key2");
        order.record_write("key3");

        // Rewriting key1 makes it the newest write...
        order.record_write("key1");
        let keys: Vec<&String> = order.iter().collect();
        assert_eq!(keys, vec!["key2", "key3", "key1"]);

        // ...but it is still the eviction candidate: arrival order is
        // untouched by rewrites
        assert_eq!(order.len(), 3);
        assert_eq!(order.peek_oldest(), Some(&"key1".to_string()));
    }

    #[test]
    fn test_order_evict_oldest() {
        let mut order = InsertOrder::new();

        order.record_write("key1");
        order.record_write("key2");

        assert_eq!(order.evict_oldest(), Some("key1".to_string()));
        assert_eq!(order.evict_oldest(), Some("key2".to_string()));
        assert_eq!(order.evict_oldest(), None);
    }

    #[test]
    fn test_order_evict_oldest_ignores_rewrites() {
        let mut order = InsertOrder::new();

        order.record_write("key1");
        order.record_write("key2");
        order.record_write("key1");

        assert_eq!(order.evict_oldest(), Some("key1".to_string()));
        assert_eq!(order.len(), 1);
        assert!(!order.contains("key1"));
    }

    #[test]
    fn test_order_reinsert_after_removal_arrives_anew() {
        let mut order = InsertOrder::new();

        order.record_write("key1");
        order.record_write("key2");
        order.remove("key1");
        order.record_write("key1");

        // key1 left and came back; key2 is now the earliest arrival
        assert_eq!(order.peek_oldest(), Some(&"key2".to_string()));
    }

    #[test]
    fn test_order_remove() {
        let mut order = InsertOrder::new();

        order.record_write("key1");
        order.record_write("key2");
        order.record_write("key3");

        order.remove("key2");

        assert_eq!(order.len(), 2);
        assert!(!order.contains("key2"));
        assert!(order.contains("key1"));
        assert!(order.contains("key3"));
        // Removed from the arrival sequence as well
        assert_eq!(order.evict_oldest(), Some("key1".to_string()));
        assert_eq!(order.evict_oldest(), Some("key3".to_string()));
    }

    #[test]
    fn test_order_remove_nonexistent_key() {
        let mut order = InsertOrder::new();

        order.record_write("key1");
        order.remove("nonexistent");

        assert_eq!(order.len(), 1);
    }

    #[test]
    fn test_order_clear() {
        let mut order = InsertOrder::new();

        order.record_write("a");
        order.record_write("b");
        order.clear();

        assert!(order.is_empty());
        assert_eq!(order.peek_oldest(), None);
    }

    #[test]
    fn test_order_rewrite_same_key_keeps_single_entry() {
        let mut order = InsertOrder::new();

        order.record_write("key1");
        order.record_write("key1");
        order.record_write("key1");

        assert_eq!(order.len(), 1);
        assert_eq!(order.evict_oldest(), Some("key1".to_string()));
        assert!(order.is_empty());
    }
}
