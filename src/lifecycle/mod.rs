//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     ProbeConfig → Bind listener → Print banner → Serve
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Stop serving, exit immediately
//! ```
//!
//! # Design Decisions
//! - Fail fast: config and bind errors are fatal
//! - The banner is printed only after the bind succeeded
//! - No connection draining on shutdown

pub mod signals;
pub mod startup;
