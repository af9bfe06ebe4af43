//! Errors surfaced by the `racine` binary.
//!
//! Each variant names the failing boot step in `operation` and keeps the
//! crate-level error as its source; `main` reports the chain on exit.

use thiserror::Error;

/// Result alias for application operations.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading failed.
    #[error("configuration rejected")]
    Config {
        /// Operation identifier.
        operation: &'static str,
        /// Source configuration error.
        source: racine_config::ConfigError,
    },
    /// API server operations failed.
    #[error("http server failed")]
    ApiServer {
        /// Operation identifier.
        operation: &'static str,
        /// Source API server error.
        source: racine_api::ApiServerError,
    },
    /// Telemetry operations failed.
    #[error("telemetry setup failed")]
    Telemetry {
        /// Operation identifier.
        operation: &'static str,
        /// Source telemetry error.
        source: racine_telemetry::TelemetryError,
    },
}

impl AppError {
    pub(crate) const fn config(
        operation: &'static str,
        source: racine_config::ConfigError,
    ) -> Self {
        Self::Config { operation, source }
    }

    pub(crate) const fn api_server(
        operation: &'static str,
        source: racine_api::ApiServerError,
    ) -> Self {
        Self::ApiServer { operation, source }
    }

    pub(crate) const fn telemetry(
        operation: &'static str,
        source: racine_telemetry::TelemetryError,
    ) -> Self {
        Self::Telemetry { operation, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io;

    #[test]
    fn app_error_helpers_build_variants() -> Result<(), Box<dyn Error>> {
        let config = AppError::config(
            "load",
            racine_config::ConfigError::EmptyHostList {
                value: ",".to_string(),
            },
        );
        assert!(matches!(config, AppError::Config { .. }));
        assert_eq!(config.to_string(), "configuration rejected");
        assert!(config.source().is_some());

        let api = AppError::api_server(
            "serve",
            racine_api::ApiServerError::Serve {
                addr: std::net::SocketAddr::from(([0, 0, 0, 0], 8000)),
                source: io::Error::other("io"),
            },
        );
        assert!(matches!(api, AppError::ApiServer { .. }));

        let telemetry = AppError::telemetry(
            "encode",
            racine_telemetry::TelemetryError::MetricsUtf8 {
                source: String::from_utf8(vec![0, 159])
                    .err()
                    .ok_or_else(|| io::Error::other("expected utf8 error"))?,
            },
        );
        assert!(matches!(telemetry, AppError::Telemetry { .. }));
        assert_eq!(telemetry.to_string(), "telemetry setup failed");
        Ok(())
    }
}
