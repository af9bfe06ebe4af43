//! Shared handler state.

use racine_config::HostAllowList;
use racine_telemetry::Metrics;

/// State shared by every handler and middleware through `Arc<ApiState>`.
pub(crate) struct ApiState {
    pub(crate) metrics: Metrics,
    pub(crate) allowed_hosts: HostAllowList,
}

impl ApiState {
    pub(crate) const fn new(metrics: Metrics, allowed_hosts: HostAllowList) -> Self {
        Self {
            metrics,
            allowed_hosts,
        }
    }
}
