//! In-memory object cache subsystem.
//!
//! # Data Flow
//! ```text
//! Handler (cache hit)
//!     → store.rs lookup_and_serve (promote under lock, write after)
//!     → bytes replayed verbatim to the client
//!
//! Handler (forward completed)
//!     → store.rs store (cap check → dedup → LRU eviction → insert)
//! ```
//!
//! # Design Decisions
//! - Constructed once at startup and shared via Arc with every handler,
//!   never a global singleton, so tests build isolated instances
//! - Entries move by ownership; there is no linked-list surgery and no
//!   aliasing of payload bytes outside the cache

pub mod entry;
pub mod store;

pub use entry::CacheEntry;
pub use store::{Lookup, ObjectCache, StoreOutcome};
