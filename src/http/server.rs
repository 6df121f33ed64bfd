//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the axum Router with the liveness routes and 404 fallback
//! - Wire up middleware (tracing, request counting, access log)
//! - Serve the bound listener until asked to stop
//!
//! Stopping drops the serve loop immediately. In-flight connections are not
//! drained.

use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, routing::any, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::http::counter::RequestCounter;
use crate::http::handlers::{liveness, not_found};
use crate::http::middleware::access_log_middleware;
use crate::http::state::ProbeState;
use crate::net::Listener;
use crate::observability::AccessLog;

/// HTTP server for the liveness probe.
pub struct HttpServer {
    router: Router,
    state: ProbeState,
}

impl HttpServer {
    /// Create a server whose access log goes through `access_log`.
    pub fn new(access_log: AccessLog) -> Self {
        let state = ProbeState::new(access_log);
        let router = build_router(state.clone());
        Self { router, state }
    }

    /// Handle to this server's request counter.
    pub fn counter(&self) -> Arc<RequestCounter> {
        Arc::clone(&self.state.counter)
    }

    /// The router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serve until `stop` completes or the accept loop fails.
    pub async fn run_until<F>(self, listener: Listener, stop: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send,
    {
        tracing::info!(
            address = %listener.local_addr(),
            log_every_n = self.state.access_log.throttle().every().get(),
            "HTTP server starting"
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();
        let serve = axum::serve(listener.into_inner(), app).into_future();

        tokio::select! {
            result = serve => result?,
            () = stop => {
                tracing::info!(
                    requests = self.state.counter.current(),
                    "HTTP server stopping"
                );
            }
        }

        Ok(())
    }
}

/// Build the probe router.
///
/// `/` and `/health` answer any method when the target has no query string.
/// Everything else, including the trailing-slash variants, is a 404.
pub fn build_router(state: ProbeState) -> Router {
    Router::new()
        .route("/", any(liveness))
        .route("/health", any(liveness))
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn_with_state(state, access_log_middleware)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::handlers::LIVENESS_BODY;
    use crate::observability::access_log::tests::MemorySink;
    use crate::observability::LogThrottle;
    use axum::{
        body::{to_bytes, Body},
        extract::ConnectInfo,
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use std::collections::HashSet;
    use std::num::NonZeroU64;
    use tower::ServiceExt;

    fn server(every: u64) -> (HttpServer, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::default());
        let throttle = LogThrottle::new(NonZeroU64::new(every).unwrap());
        let server = HttpServer::new(AccessLog::new(throttle, sink.clone()));
        (server, sink)
    }

    async fn send(router: &Router, method: Method, uri: &str) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        router.clone().oneshot(request).await.unwrap()
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn health_and_root_return_liveness_body() {
        let (server, _) = server(10);
        let router = server.router();

        for path in ["/health", "/"] {
            let response = send(&router, Method::GET, path).await;
            assert_eq!(response.status(), StatusCode::OK, "path {path}");
            assert_eq!(
                response.headers().get(header::CONTENT_TYPE).unwrap(),
                "text/plain"
            );
            assert_eq!(body_string(response).await, LIVENESS_BODY);
        }
    }

    #[tokio::test]
    async fn other_paths_are_404_with_empty_body() {
        let (server, _) = server(10);
        let router = server.router();

        for path in ["/healthz", "/health/", "/status", "/health/deep", "/index.html"] {
            let response = send(&router, Method::GET, path).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "path {path}");
            assert!(body_string(response).await.is_empty(), "path {path}");
        }
    }

    #[tokio::test]
    async fn query_string_makes_target_unknown() {
        let (server, sink) = server(1);
        let router = server.router();

        for target in ["/health?probe=k8s", "/?probe=k8s", "/health?", "/?"] {
            let response = send(&router, Method::GET, target).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "target {target}");
            assert!(body_string(response).await.is_empty(), "target {target}");
        }

        assert_eq!(server.counter().current(), 4);
        let lines = sink.lines();
        assert!(
            lines[0].ends_with("\"GET /health?probe=k8s HTTP/1.1\" 404 -"),
            "{}",
            lines[0]
        );
    }

    #[tokio::test]
    async fn any_method_is_accepted_on_liveness_paths() {
        let (server, _) = server(10);
        let router = server.router();

        for method in [Method::POST, Method::PUT, Method::DELETE, Method::HEAD, Method::OPTIONS] {
            let response = send(&router, method.clone(), "/health").await;
            assert_eq!(response.status(), StatusCode::OK, "method {method}");
        }
    }

    #[tokio::test]
    async fn counter_counts_every_request() {
        let (server, _) = server(10);
        let router = server.router();
        let counter = server.counter();
        assert_eq!(counter.current(), 0);

        let paths = ["/health", "/", "/missing", "/health", "/nope", "/"];
        for (k, path) in paths.iter().enumerate() {
            send(&router, Method::GET, path).await;
            assert_eq!(counter.current(), k as u64 + 1);
        }
    }

    #[tokio::test]
    async fn default_interval_logs_every_tenth_request() {
        let (server, sink) = server(10);
        let router = server.router();

        for n in 1..=25 {
            let path = if n % 3 == 0 { "/missing" } else { "/health" };
            send(&router, Method::GET, path).await;
        }

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[Health Check #10] "));
        assert!(lines[1].starts_with("[Health Check #20] "));
    }

    #[tokio::test]
    async fn log_line_carries_request_details() {
        let (server, sink) = server(1);
        let peer: SocketAddr = "192.0.2.10:53211".parse().unwrap();

        let mut request = Request::builder()
            .method(Method::GET)
            .uri("/missing?x=1")
            .body(Body::empty())
            .unwrap();
        request.extensions_mut().insert(ConnectInfo(peer));
        server.router().oneshot(request).await.unwrap();

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        assert!(line.starts_with("[Health Check #1] 192.0.2.10 - - ["), "{line}");
        assert!(line.ends_with("] \"GET /missing?x=1 HTTP/1.1\" 404 -"), "{line}");
    }

    #[tokio::test]
    async fn concurrent_requests_get_unique_numbers() {
        const N: u64 = 100;
        let (server, sink) = server(1);
        let router = server.router();

        let tasks: Vec<_> = (0..N)
            .map(|_| {
                let router = router.clone();
                tokio::spawn(async move { send(&router, Method::GET, "/health").await.status() })
            })
            .collect();
        for task in tasks {
            assert_eq!(task.await.unwrap(), StatusCode::OK);
        }

        assert_eq!(server.counter().current(), N);

        let numbers: HashSet<u64> = sink
            .lines()
            .iter()
            .map(|line| {
                let rest = line.strip_prefix("[Health Check #").unwrap();
                rest[..rest.find(']').unwrap()].parse().unwrap()
            })
            .collect();
        assert_eq!(numbers, (1..=N).collect());
    }

    #[tokio::test]
    async fn new_server_starts_from_zero() {
        let (first, _) = server(10);
        send(&first.router(), Method::GET, "/health").await;
        assert_eq!(first.counter().current(), 1);

        let (second, _) = server(10);
        assert_eq!(second.counter().current(), 0);
    }
}
