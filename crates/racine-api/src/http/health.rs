//! Health and diagnostics endpoints.

use std::sync::Arc;

use axum::{
    Json,
    body::Body,
    extract::State,
    http::{StatusCode, header::CONTENT_TYPE},
    response::Response,
};
use racine_telemetry::{current_request_id, current_route};
use tracing::{debug, error};

use crate::http::constants::METRICS_CONTENT_TYPE;
use crate::http::errors::ApiError;
use crate::models::{HealthResponse, PingResponse};
use crate::state::ApiState;

pub(crate) async fn healthz(State(state): State<Arc<ApiState>>) -> Json<HealthResponse> {
    state.metrics.inc_health_check();
    debug!(
        request_id = ?current_request_id(),
        route = ?current_route(),
        "health check answered"
    );
    Json(HealthResponse::ok())
}

pub(crate) async fn ping() -> Json<PingResponse> {
    Json(PingResponse::pong())
}

pub(crate) async fn metrics(State(state): State<Arc<ApiState>>) -> Result<Response, ApiError> {
    match state.metrics.render() {
        Ok(body) => Response::builder()
            .status(StatusCode::OK)
            .header(CONTENT_TYPE, METRICS_CONTENT_TYPE)
            .body(Body::from(body))
            .map_err(|err| {
                error!(error = %err, "failed to build metrics response");
                ApiError::internal("failed to build metrics response")
            }),
        Err(err) => {
            error!(error = %err, "failed to render metrics");
            Err(ApiError::internal("failed to render metrics"))
        }
    }
}

pub(crate) async fn not_found() -> ApiError {
    ApiError::not_found("no route matches the requested path")
}
