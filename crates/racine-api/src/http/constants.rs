//! Shared HTTP constants (headers, routes, problem URIs).

pub(crate) const HEADER_REQUEST_ID: &str = "x-request-id";

pub(crate) const ROUTE_HEALTHZ: &str = "/api/healthz";
pub(crate) const ROUTE_PING: &str = "/api/ping";
pub(crate) const ROUTE_METRICS: &str = "/metrics";
pub(crate) const ROUTE_UNMATCHED: &str = "unmatched";

pub(crate) const PROBLEM_INTERNAL: &str = "urn:racine:problems:internal";
pub(crate) const PROBLEM_BAD_REQUEST: &str = "urn:racine:problems:bad-request";
pub(crate) const PROBLEM_NOT_FOUND: &str = "urn:racine:problems:not-found";

pub(crate) const METRICS_CONTENT_TYPE: &str = "text/plain; version=0.0.4";
