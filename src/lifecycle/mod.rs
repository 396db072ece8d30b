//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! SIGINT (Ctrl+C)
//!     → Shutdown::trigger()
//!     → dispatcher stops accepting
//!     → in-flight handlers drain on their own
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
