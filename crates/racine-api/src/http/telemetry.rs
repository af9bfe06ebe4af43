//! Per-request metrics and request context.

use std::sync::Arc;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use racine_telemetry::with_request_context;

use crate::http::constants::{HEADER_REQUEST_ID, ROUTE_UNMATCHED};
use crate::state::ApiState;

/// Count the request under its matched route and expose the request id and
/// route to handlers for the duration of the call.
pub(crate) async fn track_requests(
    State(state): State<Arc<ApiState>>,
    request: Request,
    next: Next,
) -> Response {
    // Unmatched paths share one label so the series count stays bounded.
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map_or(ROUTE_UNMATCHED, MatchedPath::as_str)
        .to_string();
    let request_id = request
        .headers()
        .get(HEADER_REQUEST_ID)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    with_request_context(request_id, route.clone(), async move {
        let response = next.run(request).await;
        state
            .metrics
            .inc_http_request(&route, response.status().as_u16());
        response
    })
    .await
}
