//! Error types for telemetry operations.
//!
//! Messages are constant per failure stage; the metric name and the
//! underlying error travel as fields.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use prometheus::Error as PrometheusError;

/// Result alias for telemetry operations.
pub type Result<T> = std::result::Result<T, TelemetryError>;

/// Step of the metrics pipeline that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricsStage {
    /// Constructing the named collector.
    Build(&'static str),
    /// Registering the named collector.
    Register(&'static str),
    /// Encoding the registry into the exposition format.
    Encode,
}

/// Errors raised by telemetry helpers.
#[derive(Debug)]
pub enum TelemetryError {
    /// A global tracing subscriber was already installed.
    SubscriberInstall {
        /// Underlying tracing subscriber error.
        source: tracing_subscriber::util::TryInitError,
    },
    /// Prometheus rejected a collector or failed to encode.
    Metrics {
        /// Failing stage.
        stage: MetricsStage,
        /// Underlying Prometheus error.
        source: PrometheusError,
    },
    /// Encoded metrics were not valid UTF-8.
    MetricsUtf8 {
        /// Underlying UTF-8 conversion error.
        source: std::string::FromUtf8Error,
    },
}

impl TelemetryError {
    pub(crate) const fn metrics(stage: MetricsStage, source: PrometheusError) -> Self {
        Self::Metrics { stage, source }
    }
}

impl Display for TelemetryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::SubscriberInstall { .. } => "tracing subscriber already installed",
            Self::Metrics {
                stage: MetricsStage::Build(_),
                ..
            } => "invalid metrics collector",
            Self::Metrics {
                stage: MetricsStage::Register(_),
                ..
            } => "metrics collector registration rejected",
            Self::Metrics {
                stage: MetricsStage::Encode,
                ..
            } => "metrics encoding failed",
            Self::MetricsUtf8 { .. } => "encoded metrics were not utf-8",
        };
        f.write_str(message)
    }
}

impl Error for TelemetryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::SubscriberInstall { source } => Some(source),
            Self::Metrics { source, .. } => Some(source),
            Self::MetricsUtf8 { source } => Some(source),
        }
    }
}
