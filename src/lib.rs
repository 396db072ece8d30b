//! Caching Forward HTTP/1.0 Proxy
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────┐
//!                      │               CACHING PROXY                   │
//!                      │                                               │
//!   Client Request     │  ┌─────────┐   ┌──────────┐   ┌───────────┐  │
//!   ──────────────────▶│  │   net   │──▶│  proxy   │──▶│   http    │  │
//!                      │  │listener │   │dispatcher│   │  parser   │  │
//!                      │  └─────────┘   └────┬─────┘   └─────┬─────┘  │
//!                      │                     │ one task      │        │
//!                      │                     ▼ per conn      ▼        │
//!                      │               ┌──────────┐    ┌───────────┐  │
//!                      │               │ handler  │◀──▶│ LRU cache │  │
//!                      │               └────┬─────┘    └───────────┘  │
//!                      │                    │ miss                    │
//!   Client Response    │                    ▼                         │
//!   ◀──────────────────│              relay verbatim  ◀───────────────┼── Origin
//!                      │                                              │   Server
//!                      │  ┌────────────────────────────────────────┐  │
//!                      │  │        Cross-Cutting Concerns           │  │
//!                      │  │   config      lifecycle      tracing    │  │
//!                      │  └────────────────────────────────────────┘  │
//!                      └──────────────────────────────────────────────┘
//! ```
//!
//! One GET per connection (HTTP/1.0, no keep-alive). A hit replays the
//! exact captured bytes; a miss forwards, relays, and offers the response
//! to the byte-budgeted LRU cache.

// Core subsystems
pub mod cache;
pub mod config;
pub mod http;
pub mod net;
pub mod proxy;

// Cross-cutting concerns
pub mod lifecycle;

pub use cache::ObjectCache;
pub use config::ProxyConfig;
pub use lifecycle::Shutdown;
pub use proxy::ProxyServer;
