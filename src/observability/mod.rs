//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! security helpers emit tracing events
//!     → logging.rs (filter + fmt subscriber, installed by the binary)
//!     → stderr
//! ```
//!
//! # Design Decisions
//! - The library only emits events; installing a subscriber is the caller's choice
//! - Secrets (passwords, tokens, derived keys) are never logged

pub mod logging;

pub use logging::init_logging;
