//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! Client connection
//!     → parser.rs (request line, header filtering)
//!     → uri.rs (host/port/path resolution)
//!     → [proxy layer forwards or replays from cache]
//!     → response.rs (error pages when forwarding is impossible)
//! ```
//!
//! # Design Decisions
//! - HTTP/1.0 only, one request per connection
//! - Header bytes pass through verbatim; the proxy never re-frames a
//!   response it relays

pub mod parser;
pub mod response;
pub mod uri;

pub use parser::{read_and_filter_headers, read_request_line, RequestError, RequestLine};
pub use response::{write_error_response, ErrorStatus};
pub use uri::{resolve, ResolvedTarget};
