//! Container liveness probe library.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::ProbeConfig;
pub use error::ProbeError;
pub use http::HttpServer;
