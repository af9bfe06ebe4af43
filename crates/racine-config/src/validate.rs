//! Parsing helpers for raw environment values.
//!
//! # Design
//! - Every helper takes the variable name so failures point at the culprit.
//! - Values are trimmed before interpretation.

use std::net::SocketAddr;

use crate::defaults::ALLOW_ANY_HOST;
use crate::error::{ConfigError, ConfigResult};
use crate::model::{HostAllowList, LogFormatPreference};

/// Parse a listener socket such as `0.0.0.0:8000`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the value is not a socket address.
pub fn parse_bind_addr(field: &'static str, value: &str) -> ConfigResult<SocketAddr> {
    value
        .trim()
        .parse::<SocketAddr>()
        .map_err(|_| invalid(field, value, "expected_socket_addr"))
}

/// Parse a boolean flag. Accepts `true/false`, `1/0`, `yes/no`, `on/off`.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] for any other value.
pub fn parse_bool(field: &'static str, value: &str) -> ConfigResult<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(invalid(field, value, "expected_boolean")),
    }
}

/// Parse a comma separated host allow-list. Blank entries are ignored and a
/// `*` entry anywhere accepts every host.
///
/// # Errors
///
/// Returns [`ConfigError::EmptyHostList`] when no usable entries remain.
pub fn parse_host_list(value: &str) -> ConfigResult<HostAllowList> {
    let hosts: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_ascii_lowercase)
        .collect();
    if hosts.is_empty() {
        return Err(ConfigError::EmptyHostList {
            value: value.to_string(),
        });
    }
    if hosts.iter().any(|entry| entry == ALLOW_ANY_HOST) {
        return Ok(HostAllowList::Any);
    }
    Ok(HostAllowList::Hosts(hosts))
}

/// Parse the log output format.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] for anything other than `json` or `pretty`.
pub fn parse_log_format(field: &'static str, value: &str) -> ConfigResult<LogFormatPreference> {
    match value.trim().to_ascii_lowercase().as_str() {
        "json" => Ok(LogFormatPreference::Json),
        "pretty" => Ok(LogFormatPreference::Pretty),
        _ => Err(invalid(field, value, "expected_log_format")),
    }
}

/// Ensure a free-form value is not blank, returning it trimmed.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidField`] when the value is empty after trimming.
pub fn non_empty(field: &'static str, value: &str) -> ConfigResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid(field, value, "empty"));
    }
    Ok(trimmed.to_string())
}

fn invalid(field: &'static str, value: &str, reason: &'static str) -> ConfigError {
    ConfigError::InvalidField {
        field,
        value: value.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_accepts_ipv4_and_ipv6() {
        assert_eq!(
            parse_bind_addr("f", " 127.0.0.1:8000 ").ok(),
            "127.0.0.1:8000".parse().ok()
        );
        assert!(parse_bind_addr("f", "[::1]:9000").is_ok());
        assert!(matches!(
            parse_bind_addr("f", "localhost"),
            Err(ConfigError::InvalidField {
                reason: "expected_socket_addr",
                ..
            })
        ));
    }

    #[test]
    fn booleans_cover_common_spellings() {
        for raw in ["true", "1", "YES", " on "] {
            assert_eq!(parse_bool("f", raw), Ok(true), "{raw}");
        }
        for raw in ["false", "0", "no", "Off"] {
            assert_eq!(parse_bool("f", raw), Ok(false), "{raw}");
        }
        assert!(parse_bool("f", "maybe").is_err());
    }

    #[test]
    fn host_list_trims_and_detects_wildcard() {
        assert_eq!(
            parse_host_list("Example.com, ,api.local"),
            Ok(HostAllowList::Hosts(vec![
                "example.com".to_string(),
                "api.local".to_string()
            ]))
        );
        assert_eq!(parse_host_list("example.com,*"), Ok(HostAllowList::Any));
        assert!(matches!(
            parse_host_list(" , "),
            Err(ConfigError::EmptyHostList { .. })
        ));
    }

    #[test]
    fn log_format_is_case_insensitive() {
        assert_eq!(
            parse_log_format("f", "JSON"),
            Ok(LogFormatPreference::Json)
        );
        assert_eq!(
            parse_log_format("f", "pretty"),
            Ok(LogFormatPreference::Pretty)
        );
        assert!(parse_log_format("f", "xml").is_err());
    }

    #[test]
    fn non_empty_rejects_blank_values() {
        assert_eq!(non_empty("f", " UTC "), Ok("UTC".to_string()));
        assert!(non_empty("f", "   ").is_err());
    }
}
