//! Throttled access log written to standard output.
//!
//! # Line Format
//! ```text
//! [Health Check #20] 10.0.0.7 - - [19/Oct/2026 14:03:11] "GET /health HTTP/1.1" 200 -
//! ```
//!
//! The timestamp is local time at request arrival. Each line is flushed as
//! soon as it is written so external collectors see it immediately.

use std::fmt;
use std::io::{self, Write};
use std::net::IpAddr;
use std::sync::Arc;

use axum::http::{Method, StatusCode, Version};
use chrono::{DateTime, Local};

use crate::observability::throttle::LogThrottle;

const TIMESTAMP_FORMAT: &str = "%d/%b/%Y %H:%M:%S";

/// Destination for complete log lines.
pub trait LogSink: Send + Sync {
    /// Write one line (without trailing newline) and flush it.
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Writes lines to the process's standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}")?;
        out.flush()
    }
}

/// Everything one access-log line is rendered from.
#[derive(Debug, Clone)]
pub struct AccessRecord {
    /// Value of the request counter after this request was counted.
    pub request_number: u64,
    /// Peer IP, when the connection info is available.
    pub peer: Option<IpAddr>,
    pub arrived_at: DateTime<Local>,
    pub method: Method,
    /// Path plus query, as sent by the client.
    pub target: String,
    pub version: Version,
    pub status: StatusCode,
}

impl fmt::Display for AccessRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[Health Check #{}] ", self.request_number)?;
        match self.peer {
            Some(ip) => write!(f, "{ip}")?,
            None => f.write_str("-")?,
        }
        write!(
            f,
            " - - [{}] \"{} {} {}\" {} -",
            self.arrived_at.format(TIMESTAMP_FORMAT),
            self.method,
            self.target,
            protocol(self.version),
            self.status.as_u16(),
        )
    }
}

/// Protocol token for the request line.
fn protocol(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2.0",
        Version::HTTP_3 => "HTTP/3.0",
        _ => "HTTP/?",
    }
}

/// Access log gated by a [`LogThrottle`].
#[derive(Clone)]
pub struct AccessLog {
    throttle: LogThrottle,
    sink: Arc<dyn LogSink>,
}

impl AccessLog {
    pub fn new(throttle: LogThrottle, sink: Arc<dyn LogSink>) -> Self {
        Self { throttle, sink }
    }

    pub fn throttle(&self) -> LogThrottle {
        self.throttle
    }

    /// Write `record` if its request number falls on the throttle boundary.
    ///
    /// Returns whether a line was emitted. Write failures are reported through
    /// tracing and never reach the caller.
    pub fn record(&self, record: &AccessRecord) -> bool {
        if !self.throttle.should_log(record.request_number) {
            return false;
        }

        if let Err(e) = self.sink.write_line(&record.to_string()) {
            tracing::warn!(
                request_number = record.request_number,
                error = %e,
                "Failed to write access log line"
            );
            return false;
        }
        true
    }
}

impl fmt::Debug for AccessLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessLog")
            .field("throttle", &self.throttle)
            .finish_non_exhaustive()
    }
}
