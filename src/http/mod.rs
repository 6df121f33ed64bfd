//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! Accepted TCP connection
//!     → server.rs (axum serve loop, one task per connection)
//!     → middleware/access_log.rs (count request, throttled access log)
//!     → handlers.rs (200 liveness for / and /health, 404 otherwise)
//!     → Send to client
//! ```

pub mod counter;
pub mod handlers;
pub mod middleware;
pub mod server;
pub mod state;

pub use counter::RequestCounter;
pub use server::HttpServer;
pub use state::ProbeState;
