//! Configuration schema definitions.

use std::net::{Ipv4Addr, SocketAddr};
use std::num::{NonZeroU16, NonZeroU64};

/// Port bound when `PORT` is not set.
pub const DEFAULT_PORT: NonZeroU16 = match NonZeroU16::new(8080) {
    Some(port) => port,
    None => unreachable!(),
};

/// Access-log interval used when `LOG_EVERY_N` is not set.
pub const DEFAULT_LOG_EVERY_N: NonZeroU64 = match NonZeroU64::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

/// Root configuration for the health probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeConfig {
    /// TCP port to listen on (all IPv4 interfaces).
    pub port: NonZeroU16,

    /// Only every Nth request is written to the access log.
    pub log_every_n: NonZeroU64,
}

impl ProbeConfig {
    /// Address the listener binds to, `0.0.0.0:<port>`.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port.get()))
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            log_every_n: DEFAULT_LOG_EVERY_N,
        }
    }
}
