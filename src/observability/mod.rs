//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Diagnostics:
//!     → logging.rs (tracing subscriber, stderr, RUST_LOG filter)
//!
//! Access log (contractual stdout output):
//!     request counter value
//!     → throttle.rs (every Nth request only)
//!     → access_log.rs (format line, write + flush to sink)
//! ```
//!
//! # Design Decisions
//! - stdout carries only the startup banner and access-log lines
//! - Diagnostic tracing goes to stderr so log collectors see a clean stream
//! - Per-request diagnostics are DEBUG and hidden by the default filter

pub mod access_log;
pub mod logging;
pub mod throttle;

pub use access_log::{AccessLog, AccessRecord, LogSink, StdoutSink};
pub use throttle::LogThrottle;
