//! Route handlers.

use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};

/// Body returned by the liveness endpoints.
pub const LIVENESS_BODY: &str = "OK - Container is running";

/// Liveness response for `/` and `/health`.
///
/// Any method is accepted. The request target must match exactly, so a query
/// string (even an empty `?`) turns the request into a 404.
pub async fn liveness(uri: Uri) -> Response {
    if uri.query().is_some() {
        return not_found().await.into_response();
    }
    ([(header::CONTENT_TYPE, "text/plain")], LIVENESS_BODY).into_response()
}

/// 404 with an empty body for every other target.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
