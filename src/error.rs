//! Top-level error type.

use crate::config::ConfigError;
use crate::net::ListenerError;

/// Fatal startup and serve errors. Per-request conditions never end up here.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
