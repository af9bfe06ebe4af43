//! Health probe request shape and transport seam.
//!
//! # Design
//! - The request is plain data so it can be asserted on without a browser.
//! - Credentials are always included so cookies reach the backend behind the proxy.
//! - Every failure collapses to [`ApiStatus::Failed`]; the HTTP status code is not inspected.

use std::fmt::{self, Display, Formatter};

use async_trait::async_trait;

use crate::core::status::ApiStatus;

/// Relative path of the backend health endpoint, resolved against the page origin.
pub const HEALTH_PATH: &str = "/api/healthz";

/// HTTP verbs the frontend issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// `GET`
    Get,
}

/// Fetch credentials mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// Never send cookies.
    Omit,
    /// Send cookies to the same origin only.
    SameOrigin,
    /// Always send cookies.
    Include,
}

/// Outbound request description handed to a [`HealthTransport`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Origin-relative path.
    pub path: String,
    /// Credentials mode.
    pub credentials: Credentials,
}

/// The single request the status page issues on mount.
#[must_use]
pub fn health_request() -> ProbeRequest {
    ProbeRequest {
        method: HttpMethod::Get,
        path: HEALTH_PATH.to_string(),
        credentials: Credentials::Include,
    }
}

/// Body of whatever response the transport received. The HTTP status is not
/// carried: error statuses with a JSON body render like any other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeResponse {
    /// Full response body.
    pub body: String,
}

/// Errors raised while probing the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    /// The request never produced a response.
    Network {
        /// Transport-level description.
        detail: String,
    },
    /// The response body could not be read.
    Body {
        /// Transport-level description.
        detail: String,
    },
    /// The body was not valid JSON.
    Decode {
        /// Parser description.
        detail: String,
    },
}

impl Display for ProbeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network { .. } => f.write_str("health request failed"),
            Self::Body { .. } => f.write_str("failed to read health response body"),
            Self::Decode { .. } => f.write_str("health response was not valid JSON"),
        }
    }
}

impl std::error::Error for ProbeError {}

/// Anything able to perform a [`ProbeRequest`].
#[async_trait(?Send)]
pub trait HealthTransport {
    /// Issue `request` and return the raw response.
    async fn send(&self, request: &ProbeRequest) -> Result<ProbeResponse, ProbeError>;
}

/// Probe the backend health endpoint once and fold the outcome into a status.
pub async fn probe_status<T>(transport: &T) -> ApiStatus
where
    T: HealthTransport + ?Sized,
{
    match transport.send(&health_request()).await {
        Ok(response) => ApiStatus::from_body(&response.body),
        Err(_) => ApiStatus::Failed,
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    /// Transport double recording every request it sees.
    pub(crate) struct ScriptedTransport {
        outcome: Result<ProbeResponse, ProbeError>,
        pub(crate) seen: RefCell<Vec<ProbeRequest>>,
    }

    impl ScriptedTransport {
        pub(crate) fn responding(body: &str) -> Self {
            Self {
                outcome: Ok(ProbeResponse {
                    body: body.to_string(),
                }),
                seen: RefCell::new(Vec::new()),
            }
        }

        pub(crate) fn failing(error: ProbeError) -> Self {
            Self {
                outcome: Err(error),
                seen: RefCell::new(Vec::new()),
            }
        }

        pub(crate) fn calls(&self) -> usize {
            self.seen.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl HealthTransport for ScriptedTransport {
        async fn send(&self, request: &ProbeRequest) -> Result<ProbeResponse, ProbeError> {
            self.seen.borrow_mut().push(request.clone());
            self.outcome.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedTransport;
    use super::*;

    #[test]
    fn health_request_targets_proxied_endpoint_with_credentials() {
        let request = health_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/api/healthz");
        assert_eq!(request.credentials, Credentials::Include);
    }

    #[tokio::test]
    async fn successful_response_renders_json() {
        let transport = ScriptedTransport::responding(r#"{"ok":true}"#);
        let status = probe_status(&transport).await;
        assert_eq!(status.text(), r#"{"ok":true}"#);
        assert_eq!(transport.calls(), 1);
        assert_eq!(transport.seen.borrow()[0], health_request());
    }

    #[tokio::test]
    async fn json_error_payloads_render_like_any_body() {
        let transport = ScriptedTransport::responding(r#"{"status":"down"}"#);
        assert_eq!(
            probe_status(&transport).await,
            ApiStatus::Ready(r#"{"status":"down"}"#.to_string())
        );
    }

    #[tokio::test]
    async fn network_failure_falls_back() {
        let transport = ScriptedTransport::failing(ProbeError::Network {
            detail: "connection refused".into(),
        });
        assert_eq!(probe_status(&transport).await, ApiStatus::Failed);
    }

    #[tokio::test]
    async fn body_read_failure_falls_back() {
        let transport = ScriptedTransport::failing(ProbeError::Body {
            detail: "stream aborted".into(),
        });
        assert_eq!(probe_status(&transport).await.text(), "erreur");
    }

    #[tokio::test]
    async fn non_json_body_falls_back() {
        let transport = ScriptedTransport::responding("<html>Bad Gateway</html>");
        assert_eq!(probe_status(&transport).await, ApiStatus::Failed);
    }

    #[test]
    fn transport_errors_have_constant_messages() {
        let err = ProbeError::Network {
            detail: "dns".into(),
        };
        assert_eq!(err.to_string(), "health request failed");
        assert_eq!(
            ProbeError::Decode {
                detail: "eof".into()
            }
            .to_string(),
            "health response was not valid JSON"
        );
    }
}
