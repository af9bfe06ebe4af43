//! Status page state and copy, independent of the DOM.
//!
//! # Design
//! - One probe per mounted page; later mount callbacks and re-renders never re-issue it.
//! - The view is a plain struct so the Yew component and tests render the same text.

use std::cell::RefCell;

use crate::core::probe::{HealthTransport, probe_status};
use crate::core::status::ApiStatus;

/// Page heading.
pub const HEADING: &str = "racine_ci-cd_app — Frontend";
/// Label preceding the backend status.
pub const STATUS_LABEL: &str = "Statut API backend: ";
/// Deployment note preceding the proxied prefix.
pub const TOPOLOGY_NOTE: &str = "Ce frontend est servi par Nginx, et l'API est proxifiée sur ";
/// Proxied API prefix shown in the deployment note.
pub const API_PREFIX: &str = "/api/";
/// Inline style applied to the page container.
pub const PAGE_STYLE: &str = "font-family: system-ui, sans-serif; padding: 24px";

/// Text content of the status page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusView {
    /// `<h1>` text.
    pub heading: &'static str,
    /// Label before the status code span.
    pub status_label: &'static str,
    /// Status code span text.
    pub status_text: String,
    /// Deployment note before the prefix code span.
    pub topology_note: &'static str,
    /// Prefix code span text.
    pub api_prefix: &'static str,
}

impl StatusView {
    /// Render the page copy for `status`.
    #[must_use]
    pub fn new(status: &ApiStatus) -> Self {
        Self {
            heading: HEADING,
            status_label: STATUS_LABEL,
            status_text: status.text().to_string(),
            topology_note: TOPOLOGY_NOTE,
            api_prefix: API_PREFIX,
        }
    }
}

/// Lifecycle of one mounted status page.
///
/// The component keeps the model in a `RefCell` shared with the probe task and
/// renders [`StatusPageModel::view`] on every pass.
#[derive(Debug, Default)]
pub struct StatusPageModel {
    status: ApiStatus,
    probe_started: bool,
}

impl StatusPageModel {
    /// Fresh page showing the pending status.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: ApiStatus::Pending,
            probe_started: false,
        }
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> &ApiStatus {
        &self.status
    }

    /// Claim the page's single probe. Returns `false` once it has been claimed.
    pub const fn begin_probe(&mut self) -> bool {
        if self.probe_started {
            return false;
        }
        self.probe_started = true;
        true
    }

    /// Record the probe outcome; ignored once the status has settled.
    pub fn complete(&mut self, outcome: ApiStatus) -> bool {
        self.status.settle(outcome)
    }

    /// Mount effect: probe through `transport` unless this page already did.
    /// No borrow of `page` is held while the request is in flight, so renders
    /// can read the model meanwhile. Returns `true` when the status changed and
    /// the page needs a re-render.
    pub async fn on_mount<T>(page: &RefCell<Self>, transport: &T) -> bool
    where
        T: HealthTransport + ?Sized,
    {
        if !page.borrow_mut().begin_probe() {
            return false;
        }
        let outcome = probe_status(transport).await;
        page.borrow_mut().complete(outcome)
    }

    /// Current page copy.
    #[must_use]
    pub fn view(&self) -> StatusView {
        StatusView::new(&self.status)
    }
}
