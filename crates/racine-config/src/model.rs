//! Typed server configuration.

use std::net::SocketAddr;

use tracing::debug;

use crate::defaults::{
    DEFAULT_BIND_ADDR, DEFAULT_LOG_LEVEL, DEFAULT_TIME_ZONE, ENV_ALLOWED_HOSTS, ENV_BIND_ADDR,
    ENV_DEBUG, ENV_LOG_FORMAT, ENV_LOG_LEVEL, ENV_TIME_ZONE,
};
use crate::error::ConfigResult;
use crate::validate::{
    non_empty, parse_bind_addr, parse_bool, parse_host_list, parse_log_format,
};

/// Requested log output format. `None` in [`ServerConfig`] means "infer from the build".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormatPreference {
    /// Structured JSON lines.
    Json,
    /// Human-readable output.
    Pretty,
}

/// Hosts the API answers for, matched against the request `Host` header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HostAllowList {
    /// Accept every host.
    Any,
    /// Accept only the listed hosts. A leading dot (`.example.com`) also
    /// matches every subdomain.
    Hosts(Vec<String>),
}

impl HostAllowList {
    /// Whether a raw `Host` header value (port optional) is accepted.
    #[must_use]
    pub fn allows(&self, host_header: &str) -> bool {
        let entries = match self {
            Self::Any => return true,
            Self::Hosts(entries) => entries,
        };
        let host = host_without_port(host_header.trim()).to_ascii_lowercase();
        if host.is_empty() {
            return false;
        }
        entries.iter().any(|entry| {
            entry.strip_prefix('.').map_or_else(
                || *entry == host,
                |domain| host == domain || host.ends_with(entry.as_str()),
            )
        })
    }
}

fn host_without_port(value: &str) -> &str {
    if value.starts_with('[') {
        return value
            .find(']')
            .map_or(value, |end| &value[..=end]);
    }
    value.rsplit_once(':').map_or(value, |(host, _)| host)
}

/// Runtime configuration for the API server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Accepted `Host` header values.
    pub allowed_hosts: HostAllowList,
    /// Debug mode toggle.
    pub debug: bool,
    /// Default tracing directive used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Explicit log format, if configured.
    pub log_format: Option<LogFormatPreference>,
    /// Time zone label recorded on the bootstrap span.
    pub time_zone: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            allowed_hosts: HostAllowList::Any,
            debug: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: None,
            time_zone: DEFAULT_TIME_ZONE.to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error when any variable is present but invalid.
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup. Blank values
    /// are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns an error when any variable is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let bind_addr = parse_bind_addr(
            ENV_BIND_ADDR,
            get(ENV_BIND_ADDR).as_deref().unwrap_or(DEFAULT_BIND_ADDR),
        )?;
        let allowed_hosts = match get(ENV_ALLOWED_HOSTS) {
            Some(raw) => parse_host_list(&raw)?,
            None => HostAllowList::Any,
        };
        let debug = match get(ENV_DEBUG) {
            Some(raw) => parse_bool(ENV_DEBUG, &raw)?,
            None => false,
        };
        let log_level = non_empty(
            ENV_LOG_LEVEL,
            get(ENV_LOG_LEVEL).as_deref().unwrap_or(DEFAULT_LOG_LEVEL),
        )?;
        let log_format = get(ENV_LOG_FORMAT)
            .map(|raw| parse_log_format(ENV_LOG_FORMAT, &raw))
            .transpose()?;
        let time_zone = non_empty(
            ENV_TIME_ZONE,
            get(ENV_TIME_ZONE).as_deref().unwrap_or(DEFAULT_TIME_ZONE),
        )?;

        let config = Self {
            bind_addr,
            allowed_hosts,
            debug,
            log_level,
            log_format,
            time_zone,
        };
        debug!(?config, "server configuration loaded");
        Ok(config)
    }

    /// Effective log format: explicit setting first, then pretty in debug mode.
    #[must_use]
    pub const fn effective_log_format(&self) -> Option<LogFormatPreference> {
        match self.log_format {
            Some(format) => Some(format),
            None if self.debug => Some(LogFormatPreference::Pretty),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, Ok(ServerConfig::default()));
    }

    #[test]
    fn explicit_values_are_applied() -> Result<(), ConfigError> {
        let config = ServerConfig::from_lookup(lookup_from(&[
            (ENV_BIND_ADDR, "127.0.0.1:9000"),
            (ENV_ALLOWED_HOSTS, "app.example.com,.internal"),
            (ENV_DEBUG, "true"),
            (ENV_LOG_LEVEL, "debug,hyper=warn"),
            (ENV_LOG_FORMAT, "json"),
            (ENV_TIME_ZONE, "Europe/Paris"),
        ]))?;
        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 9000)));
        assert!(config.debug);
        assert_eq!(config.log_level, "debug,hyper=warn");
        assert_eq!(config.log_format, Some(LogFormatPreference::Json));
        assert_eq!(config.time_zone, "Europe/Paris");
        assert_eq!(
            config.allowed_hosts,
            HostAllowList::Hosts(vec!["app.example.com".into(), ".internal".into()])
        );
        Ok(())
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            (ENV_ALLOWED_HOSTS, ""),
            (ENV_LOG_LEVEL, "  "),
        ]));
        assert_eq!(config, Ok(ServerConfig::default()));
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = ServerConfig::from_lookup(lookup_from(&[(ENV_DEBUG, "sometimes")]));
        assert!(matches!(
            err,
            Err(ConfigError::InvalidField {
                field: ENV_DEBUG,
                ..
            })
        ));
    }

    #[test]
    fn debug_mode_prefers_pretty_logs() {
        let mut config = ServerConfig {
            debug: true,
            ..ServerConfig::default()
        };
        assert_eq!(
            config.effective_log_format(),
            Some(LogFormatPreference::Pretty)
        );
        config.log_format = Some(LogFormatPreference::Json);
        assert_eq!(
            config.effective_log_format(),
            Some(LogFormatPreference::Json)
        );
        config.debug = false;
        config.log_format = None;
        assert_eq!(config.effective_log_format(), None);
    }

    #[test]
    fn host_allow_list_matching() {
        let list = HostAllowList::Hosts(vec!["app.example.com".into(), ".internal".into()]);
        assert!(list.allows("app.example.com"));
        assert!(list.allows("APP.example.com:8080"));
        assert!(list.allows("internal"));
        assert!(list.allows("api.internal:8000"));
        assert!(!list.allows("evil.com"));
        assert!(!list.allows("notinternal"));
        assert!(!list.allows(""));
        assert!(HostAllowList::Any.allows("anything"));

        let ipv6 = HostAllowList::Hosts(vec!["[::1]".into()]);
        assert!(ipv6.allows("[::1]:8000"));
        assert!(ipv6.allows("[::1]"));
    }
}
