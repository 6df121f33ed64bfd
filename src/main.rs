//! Container liveness probe.
//!
//! Answers `/` and `/health` with `200 OK - Container is running` so an
//! orchestrator can tell the process is alive. Every other path is a 404.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌───────────────────────────────────────────────┐
//!                    │                 HEALTH PROBE                  │
//!   PORT,            │  ┌─────────┐                                  │
//!   LOG_EVERY_N ─────┼─▶│ config  │                                  │
//!                    │  └────┬────┘                                  │
//!                    │       ▼                                       │
//!   Probe request    │  ┌─────────┐   ┌────────────┐   ┌──────────┐  │
//!   ─────────────────┼─▶│   net   │──▶│ access log │──▶│ handlers │  │
//!                    │  │listener │   │ middleware │   │ 200/404  │  │
//!                    │  └─────────┘   └─────┬──────┘   └──────────┘  │
//!                    │                      │ every Nth request      │
//!                    │                      ▼                        │
//!                    │               ┌─────────────┐                 │
//!                    │               │   stdout    │─────────────────┼──▶ log collector
//!                    │               └─────────────┘                 │
//!                    └───────────────────────────────────────────────┘
//! ```
//!
//! Diagnostics go to stderr through `tracing`, filtered by `RUST_LOG`.

use std::process::ExitCode;

use health_probe::config::ProbeConfig;
use health_probe::lifecycle::startup;
use health_probe::observability::logging;
use health_probe::ProbeError;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ProbeError> {
    let config = ProbeConfig::from_env()?;
    startup::run(config).await
}
