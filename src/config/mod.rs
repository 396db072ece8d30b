//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!     → CLI port overrides the listener address
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults so the proxy runs with nothing but a port

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{CacheConfig, ForwardingConfig, ListenerConfig, ProxyConfig};
