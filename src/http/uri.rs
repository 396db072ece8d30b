//! Request URI resolution.
//!
//! # Responsibilities
//! - Split an absolute or relative request URI into host, port, and path
//! - Apply lenient defaults (port 80, path "/") for anything missing
//!
//! # Design Decisions
//! - Resolution never fails. A forwarding proxy should still attempt a
//!   best-effort request rather than reject ambiguous client input; an empty
//!   host simply fails at connect time and surfaces as 502.
//! - A zero or unparseable port also falls back to 80.

/// Where a forwarded request should be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// Origin hostname (may be empty for degenerate input).
    pub host: String,
    /// Origin TCP port.
    pub port: u16,
    /// Origin-form path, always starting with '/'.
    pub path: String,
}

/// Default origin port when the URI carries none.
const DEFAULT_PORT: u16 = 80;

/// Resolve a request URI into host, port, and path.
///
/// Accepts both absolute form (`http://host:port/path`) and bare
/// authority form (`host:port/path`). The scheme prefix is matched
/// case-insensitively.
pub fn resolve(uri: &str) -> ResolvedTarget {
    let rest = strip_scheme(uri);

    let (authority, path) = match rest.find('/') {
        Some(idx) => (&rest[..idx], rest[idx..].to_string()),
        None => (rest, "/".to_string()),
    };

    let (host, port) = match authority.find(':') {
        Some(idx) => {
            let port = authority[idx + 1..].parse::<u16>().unwrap_or(0);
            let port = if port == 0 { DEFAULT_PORT } else { port };
            (authority[..idx].to_string(), port)
        }
        None => (authority.to_string(), DEFAULT_PORT),
    };

    ResolvedTarget { host, port, path }
}

/// Strip a leading `http://` (case-insensitive) if present.
fn strip_scheme(uri: &str) -> &str {
    const SCHEME: &str = "http://";
    // get() rather than indexing: byte 7 need not be a char boundary, and
    // multibyte input must degrade to defaults, not panic.
    match uri.get(..SCHEME.len()) {
        Some(prefix) if prefix.eq_ignore_ascii_case(SCHEME) => &uri[SCHEME.len()..],
        _ => uri,
    }
}
