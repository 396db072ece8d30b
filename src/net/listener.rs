//! TCP listener wrapper.
//!
//! # Responsibilities
//! - Bind to the configured address
//! - Accept incoming TCP connections
//! - Surface accept errors as recoverable values, never panics
//!
//! # Design Decisions
//! - No admission control: every accepted connection is handed off
//!   immediately, one handler task each

use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpStream};

/// Error type for listener operations.
#[derive(Debug)]
pub enum ListenerError {
    /// Failed to bind to address.
    Bind(std::io::Error),
    /// Failed to accept connection.
    Accept(std::io::Error),
}

impl std::fmt::Display for ListenerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListenerError::Bind(e) => write!(f, "Failed to bind: {}", e),
            ListenerError::Accept(e) => write!(f, "Failed to accept: {}", e),
        }
    }
}

impl std::error::Error for ListenerError {}

/// Listening socket the dispatcher accepts from.
#[derive(Debug)]
pub struct Listener {
    inner: TcpListener,
}

impl Listener {
    /// Bind to `addr` (e.g. "0.0.0.0:8080").
    pub async fn bind(addr: &str) -> Result<Self, ListenerError> {
        let listener = TcpListener::bind(addr).await.map_err(ListenerError::Bind)?;
        let local_addr = listener.local_addr().map_err(ListenerError::Bind)?;

        tracing::info!(address = %local_addr, "Listener bound");

        Ok(Self { inner: listener })
    }

    /// Accept one connection.
    pub async fn accept(&self) -> Result<(TcpStream, SocketAddr), ListenerError> {
        let (stream, addr) = self.inner.accept().await.map_err(ListenerError::Accept)?;
        tracing::debug!(peer_addr = %addr, "Connection accepted");
        Ok((stream, addr))
    }

    /// Local address this listener is bound to.
    pub fn local_addr(&self) -> Result<SocketAddr, std::io::Error> {
        self.inner.local_addr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_ephemeral_and_accept() {
        let listener = Listener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let client = tokio::spawn(async move { TcpStream::connect(addr).await.unwrap() });
        let (_stream, peer) = listener.accept().await.unwrap();
        assert_eq!(peer.ip(), addr.ip());
        client.await.unwrap();
    }

    #[tokio::test]
    async fn test_bind_failure_is_reported() {
        let err = Listener::bind("256.0.0.1:0").await.unwrap_err();
        assert!(matches!(err, ListenerError::Bind(_)));
    }
}
