//! Per-connection failure taxonomy.
//!
//! Every variant is local to one handler: nothing here is retried, and no
//! failure is visible to other handlers or to the cache's invariants.

use thiserror::Error;

/// Ways a single relayed request can fail.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The request line did not parse; a 400 was attempted.
    #[error("malformed request line")]
    MalformedRequest,

    /// A method other than GET; a 501 was attempted.
    #[error("unsupported method: {0}")]
    UnsupportedMethod(String),

    /// Could not connect to the origin; a 502 was attempted.
    #[error("origin unreachable: {host}:{port}")]
    OriginUnreachable {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },

    /// The client went away mid-stream; nobody left to notify.
    #[error("client disconnected")]
    ClientDisconnected(#[source] std::io::Error),

    /// The origin stream failed mid-relay; bytes already sent stand.
    #[error("origin stream error")]
    OriginStream(#[source] std::io::Error),
}
