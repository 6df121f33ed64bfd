//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (PORT, LOG_EVERY_N)
//!     → loader.rs (parse, apply defaults, reject invalid values)
//!     → ProbeConfig (validated, immutable)
//!     → handed by value to the server at startup
//! ```
//!
//! # Design Decisions
//! - Loaded exactly once, before the listener is bound
//! - Unset or empty variables fall back to defaults
//! - Unparsable values are fatal; nothing is silently replaced
//! - Non-zero types make a zero port or a zero log interval unrepresentable

pub mod loader;
pub mod schema;

pub use loader::ConfigError;
pub use schema::ProbeConfig;
