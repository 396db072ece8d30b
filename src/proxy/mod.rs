//! Request forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! Accepted connection
//!     → dispatcher.rs (spawn detached handler task)
//!     → handler.rs (parse → cache lookup → forward → relay → cache store)
//!     → error.rs (per-connection failure taxonomy)
//!
//! Handler states:
//!     Start → ReadRequest → {RejectMethod | CacheHit | Forward} → Closed
//! ```
//!
//! # Design Decisions
//! - One task per connection, unbounded; the cache is the only shared state
//! - No failure crosses a connection boundary, and nothing is retried

pub mod dispatcher;
pub mod error;
pub mod handler;

pub use dispatcher::ProxyServer;
pub use error::RelayError;
