//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ProbeConfig.bind_address()
//!     → listener.rs (bind 0.0.0.0:<port>, fail fast)
//!     → Hand off to HTTP layer (axum accept loop)
//! ```
//!
//! # Design Decisions
//! - Bind failures are fatal and never retried
//! - One tokio task per accepted connection; no connection cap

pub mod listener;

pub use listener::{Listener, ListenerError};
