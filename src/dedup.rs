//! In-memory deduplication of webhook deliveries.
//!
//! GitHub retries webhook deliveries, and gateways can replay them, so the
//! same `X-GitHub-Delivery` ID may arrive more than once at one running
//! process. [`DedupCache`] remembers recently seen IDs so repeats can be
//! acknowledged without re-notifying.
//!
//! # Eviction
//!
//! The cache is bounded: once it grows past its capacity (default 1000),
//! the whole set is cleared. No LRU ordering is tracked — a burst past the
//! threshold forgets all history, and a short window of duplicate
//! reprocessing is accepted in exchange for bounded memory. Dedup here is
//! best-effort and process-local; it does not survive restarts and is not
//! shared across instances.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use crate::types::DeliveryId;

/// Number of delivery IDs retained before the cache is cleared.
pub const DEFAULT_CAPACITY: usize = 1000;

/// A bounded, thread-safe set of recently seen delivery IDs.
///
/// Intended to be shared across concurrent invocations via `Arc` and passed
/// to the handler explicitly, rather than living in a global.
#[derive(Debug)]
pub struct DedupCache {
    seen: Mutex<HashSet<DeliveryId>>,
    capacity: usize,
}

impl DedupCache {
    /// Creates a cache with the default capacity of [`DEFAULT_CAPACITY`].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a cache that clears itself once it holds more than
    /// `capacity` IDs.
    pub fn with_capacity(capacity: usize) -> Self {
        DedupCache {
            seen: Mutex::new(HashSet::new()),
            capacity,
        }
    }

    /// Atomically checks whether `id` has been seen and records it if not.
    ///
    /// Returns `true` if the ID was already present (a duplicate; state is
    /// unchanged) and `false` if it was recorded just now. Check and record
    /// happen under one lock acquisition so two concurrent invocations with
    /// the same ID can never both observe "not a duplicate".
    ///
    /// Empty IDs are never considered duplicates and are never recorded.
    pub fn check_and_record(&self, id: &DeliveryId) -> bool {
        if id.is_empty() {
            return false;
        }

        // A poisoned lock still guards a structurally valid set; recover it.
        let mut seen = self.seen.lock().unwrap_or_else(PoisonError::into_inner);

        if seen.contains(id) {
            return true;
        }

        seen.insert(id.clone());

        if seen.len() > self.capacity {
            seen.clear();
        }

        false
    }

    /// Number of IDs currently remembered.
    pub fn len(&self) -> usize {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DedupCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn first_sighting_is_not_a_duplicate() {
        let cache = DedupCache::new();
        let id = DeliveryId::new("abc");

        assert!(!cache.check_and_record(&id));
        assert!(cache.check_and_record(&id));
        assert!(cache.check_and_record(&id));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn distinct_ids_do_not_collide() {
        let cache = DedupCache::new();

        assert!(!cache.check_and_record(&DeliveryId::new("a")));
        assert!(!cache.check_and_record(&DeliveryId::new("b")));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn empty_id_is_never_a_duplicate_and_never_recorded() {
        let cache = DedupCache::new();
        let empty = DeliveryId::new("");

        assert!(!cache.check_and_record(&empty));
        assert!(!cache.check_and_record(&empty));
        assert!(cache.is_empty());
    }

    #[test]
    fn exceeding_capacity_clears_the_whole_set() {
        let cache = DedupCache::with_capacity(2);

        assert!(!cache.check_and_record(&DeliveryId::new("a")));
        assert!(!cache.check_and_record(&DeliveryId::new("b")));
        assert_eq!(cache.len(), 2);

        // Third insert pushes past capacity and triggers the bulk clear.
        assert!(!cache.check_and_record(&DeliveryId::new("c")));
        assert!(cache.is_empty());

        // History is gone: previously seen IDs are fresh again.
        assert!(!cache.check_and_record(&DeliveryId::new("a")));
    }

    #[test]
    fn default_capacity_resets_after_1000_distinct_ids() {
        let cache = DedupCache::new();

        assert!(!cache.check_and_record(&DeliveryId::new("id-0")));

        for i in 1..=DEFAULT_CAPACITY {
            cache.check_and_record(&DeliveryId::new(format!("id-{}", i)));
        }

        // 1001 distinct IDs were recorded, so the set was cleared.
        assert!(cache.is_empty());
        assert!(!cache.check_and_record(&DeliveryId::new("id-0")));
    }

    #[test]
    fn concurrent_same_id_classified_duplicate_exactly_n_minus_1_times() {
        let cache = Arc::new(DedupCache::new());
        let id = DeliveryId::new("contested");

        let handles: Vec<_> = (0..32)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let id = id.clone();
                std::thread::spawn(move || cache.check_and_record(&id))
            })
            .collect();

        let fresh_count = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|duplicate| !duplicate)
            .count();

        assert_eq!(fresh_count, 1, "exactly one thread may win the record");
    }
}
