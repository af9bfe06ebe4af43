//! Host header allow-list enforcement.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::HOST,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::http::errors::ApiError;
use crate::state::ApiState;

/// Reject requests whose `Host` (or URI authority) is not on the allow-list.
pub(crate) async fn require_allowed_host(
    State(state): State<Arc<ApiState>>,
    request: Request,
    next: Next,
) -> Response {
    let host = request
        .headers()
        .get(HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .or_else(|| request.uri().authority().map(ToString::to_string))
        .unwrap_or_default();

    if state.allowed_hosts.allows(&host) {
        return next.run(request).await;
    }
    warn!(host = %host, "rejected request for disallowed host");
    ApiError::bad_request(format!("host '{host}' is not allowed")).into_response()
}
