//! JSON payloads exchanged over the API.

use serde::{Deserialize, Serialize};

/// Body of `GET /api/healthz`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    /// Always `"ok"` while the process is serving requests.
    pub status: String,
}

impl HealthResponse {
    /// Healthy response.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Body of `GET /api/ping`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PingResponse {
    /// Always `"pong"`.
    pub message: String,
}

impl PingResponse {
    /// Standard pong reply.
    #[must_use]
    pub fn pong() -> Self {
        Self {
            message: "pong".to_string(),
        }
    }
}

/// RFC9457-compatible problem document surfaced on errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    /// URI reference identifying the problem type.
    pub kind: String,
    /// Short, human-readable summary of the issue.
    pub title: String,
    /// HTTP status code associated with the error.
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Detailed diagnostic message when available.
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn health_and_ping_match_wire_format() -> Result<(), serde_json::Error> {
        assert_eq!(
            serde_json::to_value(HealthResponse::ok())?,
            json!({"status": "ok"})
        );
        assert_eq!(
            serde_json::to_value(PingResponse::pong())?,
            json!({"message": "pong"})
        );
        Ok(())
    }

    #[test]
    fn problem_details_omit_missing_detail() -> Result<(), serde_json::Error> {
        let problem = ProblemDetails {
            kind: "urn:racine:problems:not-found".to_string(),
            title: "resource not found".to_string(),
            status: 404,
            detail: None,
        };
        assert_eq!(
            serde_json::to_value(&problem)?,
            json!({
                "type": "urn:racine:problems:not-found",
                "title": "resource not found",
                "status": 404
            })
        );
        Ok(())
    }
}
