//! Environment variable names and their fallback values.
//!
//! # Design
//! - Keep every variable name in one place so the binary and tests agree.
//! - Defaults mirror a container deployment behind a reverse proxy.

/// Listener socket for the API server.
pub const ENV_BIND_ADDR: &str = "RACINE_BIND_ADDR";
/// Comma separated list of accepted `Host` header values.
pub const ENV_ALLOWED_HOSTS: &str = "RACINE_ALLOWED_HOSTS";
/// Debug toggle.
pub const ENV_DEBUG: &str = "RACINE_DEBUG";
/// Default tracing directive when `RUST_LOG` is unset.
pub const ENV_LOG_LEVEL: &str = "RACINE_LOG_LEVEL";
/// Log output format (`json` or `pretty`).
pub const ENV_LOG_FORMAT: &str = "RACINE_LOG_FORMAT";
/// Time zone label recorded on the bootstrap span.
pub const ENV_TIME_ZONE: &str = "RACINE_TIME_ZONE";

/// Default listener socket.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
/// Allow-list entry accepting any host.
pub const ALLOW_ANY_HOST: &str = "*";
/// Default tracing directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Default time zone label.
pub const DEFAULT_TIME_ZONE: &str = "UTC";
