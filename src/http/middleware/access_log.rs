//! Request counting and throttled access logging.
//!
//! Every request passing through the router is counted, whether or not a
//! route matches. The count decides if the request is written to the
//! access log once the response status is known.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use chrono::Local;

use crate::http::state::ProbeState;
use crate::observability::AccessRecord;

pub async fn access_log_middleware(
    State(state): State<ProbeState>,
    request: Request,
    next: Next,
) -> Response {
    let arrived_at = Local::now();
    let request_number = state.counter.increment();

    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());
    let method = request.method().clone();
    let target = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());
    let version = request.version();

    let response = next.run(request).await;

    tracing::debug!(
        request_number,
        method = %method,
        target = %target,
        status = response.status().as_u16(),
        "Probe request handled"
    );

    state.access_log.record(&AccessRecord {
        request_number,
        peer,
        arrived_at,
        method,
        target,
        version,
        status: response.status(),
    });

    response
}
