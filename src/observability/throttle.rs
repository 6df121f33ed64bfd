//! Access-log throttling.
//!
//! Liveness probes hit the server every few seconds. Logging each one buries
//! everything else, so only every Nth request is written.

use std::num::NonZeroU64;

/// Decides which request numbers are logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogThrottle {
    every: NonZeroU64,
}

impl LogThrottle {
    pub fn new(every: NonZeroU64) -> Self {
        Self { every }
    }

    /// The logging interval.
    pub fn every(&self) -> NonZeroU64 {
        self.every
    }

    /// Whether the request with the given 1-based number should be logged.
    pub fn should_log(&self, request_number: u64) -> bool {
        request_number != 0 && request_number % self.every.get() == 0
    }
}
