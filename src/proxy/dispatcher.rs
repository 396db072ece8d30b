//! Connection fan-out.
//!
//! # Responsibilities
//! - Accept connections in an unbounded loop
//! - Spawn one detached handler task per connection
//! - Stop accepting when the shutdown signal fires
//!
//! # Design Decisions
//! - The dispatcher never touches request content
//! - Accept errors (including broken pipe) are ordinary and recoverable;
//!   the loop logs and keeps going
//! - Handler tasks are fire-and-forget; on shutdown, in-flight connections
//!   drain on their own

use std::sync::Arc;

use tokio::sync::watch;

use crate::cache::ObjectCache;
use crate::config::ProxyConfig;
use crate::net::Listener;
use crate::proxy::handler::handle_connection;

/// The proxy server: a shared cache plus the accept loop that feeds it.
pub struct ProxyServer {
    cache: Arc<ObjectCache>,
    config: ProxyConfig,
}

impl ProxyServer {
    /// Build a server (and its cache) from configuration.
    pub fn new(config: ProxyConfig) -> Self {
        let cache = Arc::new(ObjectCache::new(
            config.cache.capacity_bytes,
            config.cache.max_object_bytes,
        ));
        Self { cache, config }
    }

    /// Handle to the shared cache (used by tests to inspect state).
    pub fn cache(&self) -> Arc<ObjectCache> {
        Arc::clone(&self.cache)
    }

    /// Accept connections until the shutdown signal fires.
    pub async fn run(self, listener: Listener, mut shutdown: watch::Receiver<bool>) {
        tracing::info!(
            capacity_bytes = self.config.cache.capacity_bytes,
            max_object_bytes = self.config.cache.max_object_bytes,
            "Proxy dispatcher running"
        );

        loop {
            tokio::select! {
                accepted = listener.accept() => match accepted {
                    Ok((stream, peer)) => {
                        let cache = Arc::clone(&self.cache);
                        let forwarding = self.config.forwarding.clone();
                        tokio::spawn(handle_connection(stream, peer, cache, forwarding));
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "Accept failed");
                    }
                },
                _ = shutdown.changed() => {
                    tracing::info!("Shutdown signal received, no longer accepting");
                    return;
                }
            }
        }
    }
}
