//! Startup orchestration.
//!
//! Order: bind the listener, announce it on stdout, then serve. A bind
//! failure returns before anything is written to stdout.

use std::future::Future;
use std::sync::Arc;

use crate::config::ProbeConfig;
use crate::error::ProbeError;
use crate::http::HttpServer;
use crate::lifecycle::signals;
use crate::net::Listener;
use crate::observability::{AccessLog, LogSink, LogThrottle, StdoutSink};

/// Run the probe on stdout until SIGINT or SIGTERM.
pub async fn run(config: ProbeConfig) -> Result<(), ProbeError> {
    run_with(config, Arc::new(StdoutSink), signals::terminate()).await
}

/// Run the probe writing the banner and access log to `sink`, until `stop`
/// completes.
pub async fn run_with<F>(
    config: ProbeConfig,
    sink: Arc<dyn LogSink>,
    stop: F,
) -> Result<(), ProbeError>
where
    F: Future<Output = ()> + Send,
{
    tracing::info!(
        port = config.port.get(),
        log_every_n = config.log_every_n.get(),
        "Configuration loaded"
    );

    let listener = Listener::bind(&config).await?;

    sink.write_line(&banner(&config))?;

    let access_log = AccessLog::new(LogThrottle::new(config.log_every_n), sink);
    HttpServer::new(access_log).run_until(listener, stop).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// The line announcing a successful bind.
pub fn banner(config: &ProbeConfig) -> String {
    format!("Health check server listening on port {}", config.port)
}
