//! TCP listener setup.
//!
//! # Responsibilities
//! - Bind to the configured address
//! - Surface bind failures as a typed, fatal error

use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::config::ProbeConfig;

/// Error type for listener operations.
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    /// Failed to bind to address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// A bound TCP listener, ready to be handed to the HTTP server.
#[derive(Debug)]
pub struct Listener {
    inner: TcpListener,
    local_addr: SocketAddr,
}

impl Listener {
    /// Bind to `0.0.0.0:<port>` from the configuration.
    pub async fn bind(config: &ProbeConfig) -> Result<Self, ListenerError> {
        Self::bind_addr(config.bind_address()).await
    }

    /// Bind to an explicit address.
    pub async fn bind_addr(addr: SocketAddr) -> Result<Self, ListenerError> {
        let inner = TcpListener::bind(addr)
            .await
            .map_err(|source| ListenerError::Bind { addr, source })?;

        let local_addr = inner
            .local_addr()
            .map_err(|source| ListenerError::Bind { addr, source })?;

        tracing::info!(address = %local_addr, "Listener bound");

        Ok(Self { inner, local_addr })
    }

    /// Get the local address this listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Release the underlying tokio listener.
    pub fn into_inner(self) -> TcpListener {
        self.inner
    }
}
