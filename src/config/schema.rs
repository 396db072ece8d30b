//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every section has a full set of defaults so a minimal (or absent) config
//! file still yields a working proxy.

use serde::{Deserialize, Serialize};

/// Root configuration for the proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Object cache sizing.
    pub cache: CacheConfig,

    /// Origin-facing request rewriting.
    pub forwarding: ForwardingConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Cache sizing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Total byte budget for all cached objects.
    pub capacity_bytes: u64,

    /// Largest single response eligible for caching.
    pub max_object_bytes: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity_bytes: 1_049_000,
            max_object_bytes: 102_400,
        }
    }
}

/// Origin-facing request settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ForwardingConfig {
    /// User-Agent sent to origin servers.
    pub user_agent: String,
}

impl Default for ForwardingConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0".to_string(),
        }
    }
}
