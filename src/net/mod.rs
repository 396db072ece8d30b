//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → listener.rs (accept loop feed)
//!     → Hand off to the proxy dispatcher
//! ```
//!
//! # Design Decisions
//! - Plain TCP only; each connection is owned exclusively by one handler

pub mod listener;

pub use listener::{Listener, ListenerError};
