use std::future::Future;

use racine_api::ApiServer;
use racine_config::{LogFormatPreference, ServerConfig};
use racine_telemetry::{GlobalContextGuard, LogFormat, LoggingConfig, Metrics, build_sha};
use tokio::signal;
use tracing::{error, info};

use crate::error::{AppError, AppResult};

/// Entry point for the racine boot sequence.
///
/// # Errors
///
/// Returns an error if configuration is invalid, logging cannot be installed,
/// or the API server fails to bind or serve.
pub async fn run_app() -> AppResult<()> {
    let config =
        ServerConfig::from_env().map_err(|err| AppError::config("config.from_env", err))?;
    racine_telemetry::init_logging(&logging_config(&config))
        .map_err(|err| AppError::telemetry("telemetry.init", err))?;
    let _context = GlobalContextGuard::new("racine", &config.time_zone);

    info!(
        bind_addr = %config.bind_addr,
        debug = config.debug,
        "racine bootstrap starting"
    );
    serve_until(&config, shutdown_signal()).await?;
    info!("racine shut down cleanly");
    Ok(())
}

/// Build the API from `config` and serve it until `shutdown` resolves.
pub(crate) async fn serve_until<F>(config: &ServerConfig, shutdown: F) -> AppResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let metrics = Metrics::new().map_err(|err| AppError::telemetry("telemetry.metrics", err))?;
    ApiServer::new(config, metrics)
        .serve(config.bind_addr, shutdown)
        .await
        .map_err(|err| AppError::api_server("api.serve", err))
}

pub(crate) fn logging_config(config: &ServerConfig) -> LoggingConfig<'_> {
    let format = match config.effective_log_format() {
        Some(LogFormatPreference::Json) => LogFormat::Json,
        Some(LogFormatPreference::Pretty) => LogFormat::Pretty,
        None => LogFormat::infer(),
    };
    LoggingConfig {
        level: &config.log_level,
        format,
        build_sha: build_sha(),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!(error = %err, "failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received SIGINT, starting graceful shutdown"),
        () = terminate => info!("received SIGTERM, starting graceful shutdown"),
    }
}
