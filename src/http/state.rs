//! Shared server state.

use std::sync::Arc;

use crate::http::counter::RequestCounter;
use crate::observability::AccessLog;

/// State injected into the request middleware.
#[derive(Debug, Clone)]
pub struct ProbeState {
    pub counter: Arc<RequestCounter>,
    pub access_log: AccessLog,
}

impl ProbeState {
    /// Fresh state with the counter at zero.
    pub fn new(access_log: AccessLog) -> Self {
        Self {
            counter: Arc::new(RequestCounter::new()),
            access_log,
        }
    }
}
