//! Cached object representation.

use std::sync::Arc;

/// One cached response, keyed by the raw request URI.
///
/// The payload is the exact byte sequence captured from the origin (status
/// line, headers, and body as received). It is immutable once admitted;
/// lookups hand out a reference-counted copy, never a mutable alias into
/// the cache.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Raw request URI this object was fetched for.
    pub key: String,
    /// Captured response bytes.
    pub payload: Arc<[u8]>,
}

impl CacheEntry {
    pub fn new(key: String, payload: Vec<u8>) -> Self {
        Self {
            key,
            payload: payload.into(),
        }
    }

    /// Payload size in bytes, the unit the cache budget is accounted in.
    pub fn size(&self) -> u64 {
        self.payload.len() as u64
    }
}
