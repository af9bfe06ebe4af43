//! Backend status value shown on the page.
//!
//! # Design
//! - Three states only: pending, the JSON text of the health response, or the fallback.
//! - Settles at most once; a settled status never returns to pending.

use crate::core::json;
use crate::core::probe::ProbeError;

/// Text shown while the health probe is in flight.
pub const PENDING_TEXT: &str = "...";
/// Text shown when the probe failed for any reason.
pub const FAILURE_TEXT: &str = "erreur";

/// Outcome of the one-shot health probe.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ApiStatus {
    /// Probe not resolved yet.
    #[default]
    Pending,
    /// Compact JSON serialisation of the decoded response body.
    Ready(String),
    /// Probe failed (transport, body read or decode).
    Failed,
}

impl ApiStatus {
    /// Build the status from a raw response body: decodable JSON becomes
    /// [`ApiStatus::Ready`], anything else [`ApiStatus::Failed`].
    #[must_use]
    pub fn from_body(body: &str) -> Self {
        decode_body(body).map_or(Self::Failed, Self::Ready)
    }

    /// Text rendered inside the status `<code>` span.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Pending => PENDING_TEXT,
            Self::Ready(json) => json,
            Self::Failed => FAILURE_TEXT,
        }
    }

    /// Whether the probe is still outstanding.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Move from pending to `outcome`. Returns `false` (leaving `self`
    /// untouched) when already settled or when `outcome` is itself pending.
    pub fn settle(&mut self, outcome: Self) -> bool {
        if !self.is_pending() || outcome.is_pending() {
            return false;
        }
        *self = outcome;
        true
    }
}

/// Parse `body` as JSON and serialise it back the way the browser's
/// `JSON.stringify` would.
///
/// # Errors
///
/// Returns [`ProbeError::Decode`] when the body is not a single JSON value.
pub fn decode_body(body: &str) -> Result<String, ProbeError> {
    json::parse(body).map(|value| json::stringify(&value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_is_the_initial_state() {
        let status = ApiStatus::default();
        assert!(status.is_pending());
        assert_eq!(status.text(), "...");
    }

    #[test]
    fn json_bodies_are_reserialised_compactly() {
        assert_eq!(
            ApiStatus::from_body(r#"{"ok":true}"#).text(),
            r#"{"ok":true}"#
        );
        assert_eq!(
            ApiStatus::from_body("{ \"status\" : \"ok\" }\n").text(),
            r#"{"status":"ok"}"#
        );
        assert_eq!(ApiStatus::from_body("null").text(), "null");
        assert_eq!(ApiStatus::from_body("[1, 2]").text(), "[1,2]");
    }

    #[test]
    fn numbers_follow_browser_formatting() {
        assert_eq!(
            ApiStatus::from_body(r#"{"v":1.0,"w":1e2,"x":-0,"y":1e400}"#).text(),
            r#"{"v":1,"w":100,"x":0,"y":null}"#
        );
    }

    #[test]
    fn object_key_order_is_preserved() {
        assert_eq!(
            ApiStatus::from_body(r#"{"zeta":1,"alpha":{"b":2,"a":3}}"#).text(),
            r#"{"zeta":1,"alpha":{"b":2,"a":3}}"#
        );
    }

    #[test]
    fn undecodable_bodies_fail() {
        for body in ["", "<html>502 Bad Gateway</html>", "{\"ok\":", "ok"] {
            assert_eq!(ApiStatus::from_body(body), ApiStatus::Failed, "{body:?}");
        }
        assert_eq!(ApiStatus::Failed.text(), "erreur");
    }

    #[test]
    fn settle_is_one_way() {
        let mut status = ApiStatus::Pending;
        assert!(!status.settle(ApiStatus::Pending));
        assert!(status.settle(ApiStatus::Ready("{}".into())));
        assert!(!status.settle(ApiStatus::Failed));
        assert_eq!(status, ApiStatus::Ready("{}".into()));
    }

    #[test]
    fn decode_reports_errors() {
        assert!(matches!(
            decode_body("nope"),
            Err(ProbeError::Decode { .. })
        ));
    }
}
