//! Shared LRU object cache.
//!
//! # Responsibilities
//! - Hold small origin responses keyed by raw request URI
//! - Enforce the total byte budget and the per-object cap
//! - Evict in strict least-recently-used order
//!
//! # Design Decisions
//! - One mutex guards the map, the recency order, and the byte counter, so
//!   lookup+promote and store+dedup are each a single critical section (the
//!   find-then-reacquire pattern can race and is avoided entirely)
//! - Critical sections never span socket I/O: a hit clones the Arc'd payload
//!   out of the lock, then writes to the client, so a stalled reader never
//!   blocks other handlers
//! - Nothing here hard-errors; an uncacheable object is an outcome

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::cache::entry::CacheEntry;

/// Result of a cache lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// The payload was written to the sink and the entry promoted to MRU.
    Hit,
    /// Nothing was written; cache state is unchanged.
    Miss,
}

/// Result of offering an object to the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    /// Inserted at the MRU position, evicting as needed.
    Stored,
    /// An entry for this key already existed; it was promoted, the new
    /// payload discarded.
    AlreadyCached,
    /// The payload exceeds the per-object cap (or the whole budget); not
    /// admitted.
    TooLarge,
}

/// Byte-budgeted LRU cache shared by all connection handlers.
#[derive(Debug)]
pub struct ObjectCache {
    capacity: u64,
    max_object: u64,
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    entries: HashMap<String, CacheEntry>,
    /// Recency order: front = MRU, back = LRU.
    order: VecDeque<String>,
    used_bytes: u64,
}

impl Inner {
    /// Move `key` to the MRU position. The key must already be present.
    fn promote(&mut self, key: &str) {
        self.order.retain(|k| k != key);
        self.order.push_front(key.to_string());
    }

    /// Remove and return the least recently used entry, if any.
    fn evict_oldest(&mut self) -> Option<CacheEntry> {
        let key = self.order.pop_back()?;
        let entry = self.entries.remove(&key)?;
        self.used_bytes -= entry.size();
        Some(entry)
    }
}

impl ObjectCache {
    /// Create an empty cache with a total byte budget and a per-object cap.
    pub fn new(capacity: u64, max_object: u64) -> Self {
        Self {
            capacity,
            max_object,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Look up `key`; on a hit, replay the captured bytes to `sink` and
    /// promote the entry to MRU.
    ///
    /// Promotion and the find happen under one lock; the sink write happens
    /// after the lock is released.
    pub async fn lookup_and_serve<W>(&self, key: &str, sink: &mut W) -> std::io::Result<Lookup>
    where
        W: AsyncWrite + Unpin,
    {
        let payload = {
            let mut inner = self.inner.lock().expect("cache lock poisoned");
            let found = inner.entries.get(key).map(|e| Arc::clone(&e.payload));
            if found.is_some() {
                inner.promote(key);
            }
            found
        };

        match payload {
            Some(bytes) => {
                sink.write_all(&bytes).await?;
                Ok(Lookup::Hit)
            }
            None => Ok(Lookup::Miss),
        }
    }

    /// Offer a captured response for insertion.
    ///
    /// Over-cap payloads are rejected. If the key is already present (a
    /// racing fetch for the same URI finished first), the existing entry is
    /// promoted and the duplicate discarded. Otherwise entries are evicted
    /// from the LRU end, one at a time, until the payload fits.
    pub fn store(&self, key: &str, payload: Vec<u8>) -> StoreOutcome {
        let size = payload.len() as u64;
        if size > self.max_object {
            return StoreOutcome::TooLarge;
        }

        let mut inner = self.inner.lock().expect("cache lock poisoned");

        if inner.entries.contains_key(key) {
            inner.promote(key);
            return StoreOutcome::AlreadyCached;
        }

        while inner.used_bytes + size > self.capacity {
            if inner.evict_oldest().is_none() {
                // Emptied the cache and it still does not fit.
                return StoreOutcome::TooLarge;
            }
        }

        inner
            .entries
            .insert(key.to_string(), CacheEntry::new(key.to_string(), payload));
        inner.order.push_front(key.to_string());
        inner.used_bytes += size;
        StoreOutcome::Stored
    }

    /// Per-object admission cap in bytes.
    pub fn max_object(&self) -> u64 {
        self.max_object
    }

    /// Current number of cached objects.
    pub fn len(&self) -> usize {
        self.inner.lock().expect("cache lock poisoned").entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes currently admitted against the budget.
    pub fn used_bytes(&self) -> u64 {
        self.inner.lock().expect("cache lock poisoned").used_bytes
    }

    /// Read-only presence check; does not touch recency order.
    pub fn contains(&self, key: &str) -> bool {
        self.inner
            .lock()
            .expect("cache lock poisoned")
            .entries
            .contains_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    async fn serve(cache: &ObjectCache, key: &str) -> (Lookup, Vec<u8>) {
        let mut sink = Cursor::new(Vec::new());
        let outcome = cache.lookup_and_serve(key, &mut sink).await.unwrap();
        (outcome, sink.into_inner())
    }

    #[tokio::test]
    async fn test_store_then_lookup_roundtrips_bytes() {
        let cache = ObjectCache::new(1000, 100);
        let payload: Vec<u8> = (0..100u8).collect();
        assert_eq!(cache.store("http://a/", payload.clone()), StoreOutcome::Stored);

        let (outcome, bytes) = serve(&cache, "http://a/").await;
        assert_eq!(outcome, Lookup::Hit);
        assert_eq!(bytes, payload);
    }

    #[tokio::test]
    async fn test_miss_writes_nothing() {
        let cache = ObjectCache::new(1000, 100);
        let (outcome, bytes) = serve(&cache, "http://absent/").await;
        assert_eq!(outcome, Lookup::Miss);
        assert!(bytes.is_empty());
    }

    #[tokio::test]
    async fn test_over_cap_payload_is_not_admitted() {
        let cache = ObjectCache::new(1000, 100);
        assert_eq!(cache.store("http://big/", vec![0u8; 101]), StoreOutcome::TooLarge);
        let (outcome, _) = serve(&cache, "http://big/").await;
        assert_eq!(outcome, Lookup::Miss);
        assert_eq!(cache.used_bytes(), 0);
    }

    #[test]
    fn test_duplicate_key_stored_once() {
        let cache = ObjectCache::new(1000, 100);
        assert_eq!(cache.store("k", vec![1u8; 10]), StoreOutcome::Stored);
        assert_eq!(cache.store("k", vec![2u8; 20]), StoreOutcome::AlreadyCached);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.used_bytes(), 10);
    }

    #[test]
    fn test_byte_budget_never_exceeded() {
        let cache = ObjectCache::new(100, 100);
        for i in 0..20 {
            cache.store(&format!("k{}", i), vec![0u8; 30]);
            assert!(cache.used_bytes() <= 100);
        }
        // 3 x 30 bytes fit in 100; the fourth store evicts one.
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.used_bytes(), 90);
    }

    #[test]
    fn test_eviction_is_strict_lru() {
        let cache = ObjectCache::new(100, 100);
        cache.store("a", vec![0u8; 40]);
        cache.store("b", vec![0u8; 40]);
        // 90 bytes needed: both "a" and "b" must go, oldest first.
        cache.store("c", vec![0u8; 90]);
        assert!(!cache.contains("a"));
        assert!(!cache.contains("b"));
        assert!(cache.contains("c"));
        assert_eq!(cache.used_bytes(), 90);
    }

    #[test]
    fn test_eviction_frees_smallest_sufficient_set() {
        let cache = ObjectCache::new(100, 100);
        cache.store("a", vec![0u8; 40]);
        cache.store("b", vec![0u8; 40]);
        // 20 bytes needed: evicting "a" alone frees enough.
        cache.store("c", vec![0u8; 60]);
        assert!(!cache.contains("a"));
        assert!(cache.contains("b"));
        assert!(cache.contains("c"));
    }

    #[tokio::test]
    async fn test_lookup_promotes_to_mru() {
        let cache = ObjectCache::new(100, 100);
        cache.store("a", vec![0u8; 40]);
        cache.store("b", vec![0u8; 40]);

        // Access order A, B, A leaves B least recently used.
        serve(&cache, "a").await;
        serve(&cache, "b").await;
        serve(&cache, "a").await;

        cache.store("c", vec![0u8; 40]);
        assert!(cache.contains("a"));
        assert!(!cache.contains("b"));
        assert!(cache.contains("c"));
    }

    #[test]
    fn test_store_promotes_existing_entry() {
        let cache = ObjectCache::new(100, 100);
        cache.store("a", vec![0u8; 40]);
        cache.store("b", vec![0u8; 40]);
        // Duplicate store for "a" promotes it; "b" becomes LRU.
        cache.store("a", vec![9u8; 40]);
        cache.store("c", vec![0u8; 40]);
        assert!(cache.contains("a"));
        assert!(!cache.contains("b"));
    }

    #[test]
    fn test_object_larger_than_whole_budget() {
        let cache = ObjectCache::new(50, 100);
        cache.store("a", vec![0u8; 40]);
        // Fits under the object cap but not the budget even when empty.
        assert_eq!(cache.store("big", vec![0u8; 60]), StoreOutcome::TooLarge);
        // The eviction loop drained the cache trying to make room.
        assert!(!cache.contains("big"));
        assert!(cache.used_bytes() <= 50);
    }

    #[test]
    fn test_concurrent_stores_same_key_leave_one_entry() {
        let cache = Arc::new(ObjectCache::new(10_000, 1_000));
        let mut handles = Vec::new();
        for i in 0..8u8 {
            let cache = Arc::clone(&cache);
            handles.push(std::thread::spawn(move || {
                cache.store("http://same/", vec![i; 100]);
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.used_bytes(), 100);
    }
}
