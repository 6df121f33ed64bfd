//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::io;
use std::net::SocketAddr;
use std::num::NonZeroU64;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use health_probe::http::RequestCounter;
use health_probe::net::Listener;
use health_probe::observability::{AccessLog, LogSink, LogThrottle};
use health_probe::HttpServer;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Collects access-log lines instead of writing them to stdout.
#[derive(Default)]
pub struct CaptureSink {
    lines: Mutex<Vec<String>>,
}

impl CaptureSink {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl LogSink for CaptureSink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.lines.lock().unwrap().push(line.to_string());
        Ok(())
    }
}

/// An in-process probe server on an ephemeral loopback port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub counter: Arc<RequestCounter>,
    pub sink: Arc<CaptureSink>,
    stop_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<io::Result<()>>,
}

impl TestServer {
    pub async fn start(log_every_n: u64) -> Self {
        let listener = Listener::bind_addr("127.0.0.1:0".parse().unwrap())
            .await
            .unwrap();
        let addr = listener.local_addr();

        let sink = Arc::new(CaptureSink::default());
        let throttle = LogThrottle::new(NonZeroU64::new(log_every_n).unwrap());
        let server = HttpServer::new(AccessLog::new(throttle, sink.clone()));
        let counter = server.counter();

        let (stop_tx, stop_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(server.run_until(listener, async move {
            let _ = stop_rx.await;
        }));

        Self {
            addr,
            counter,
            sink,
            stop_tx: Some(stop_tx),
            task,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn stop(mut self) {
        if let Some(stop) = self.stop_tx.take() {
            let _ = stop.send(());
        }
        tokio::time::timeout(Duration::from_secs(5), &mut self.task)
            .await
            .expect("server did not stop")
            .unwrap()
            .unwrap();
    }
}

/// HTTP client that ignores proxy settings from the environment.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .build()
        .unwrap()
}

/// Find a port that is currently free on all interfaces.
pub fn free_port() -> u16 {
    let probe = std::net::TcpListener::bind("0.0.0.0:0").unwrap();
    probe.local_addr().unwrap().port()
}
