//! Per-server request counter.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counts every request the server has seen since it was constructed.
///
/// Owned by the server state and shared with handlers through an `Arc`.
/// Relaxed ordering is enough: each `fetch_add` is indivisible, so every
/// request observes a distinct value.
#[derive(Debug, Default)]
pub struct RequestCounter {
    count: AtomicU64,
}

impl RequestCounter {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self {
            count: AtomicU64::new(0),
        }
    }

    /// Count one request and return its 1-based number.
    pub fn increment(&self) -> u64 {
        self.count.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Number of requests counted so far.
    pub fn current(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}
