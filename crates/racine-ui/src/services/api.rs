//! Fetch-backed health transport.

use async_trait::async_trait;
use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::core::probe::{
    Credentials, HealthTransport, HttpMethod, ProbeError, ProbeRequest, ProbeResponse,
};

/// Issues probe requests through the browser `fetch` API, relative to the page origin.
#[derive(Clone, Debug, Default)]
pub(crate) struct FetchTransport;

const fn credentials_mode(credentials: Credentials) -> RequestCredentials {
    match credentials {
        Credentials::Omit => RequestCredentials::Omit,
        Credentials::SameOrigin => RequestCredentials::SameOrigin,
        Credentials::Include => RequestCredentials::Include,
    }
}

#[async_trait(?Send)]
impl HealthTransport for FetchTransport {
    async fn send(&self, request: &ProbeRequest) -> Result<ProbeResponse, ProbeError> {
        let builder = match request.method {
            HttpMethod::Get => Request::get(&request.path),
        };
        let response = builder
            .credentials(credentials_mode(request.credentials))
            .send()
            .await
            .map_err(|err| ProbeError::Network {
                detail: err.to_string(),
            })?;
        let body = response.text().await.map_err(|err| ProbeError::Body {
            detail: err.to_string(),
        })?;
        Ok(ProbeResponse { body })
    }
}
