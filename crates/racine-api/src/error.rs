//! Server lifecycle errors.
//!
//! Both variants carry the listen address so a failed start-up can be traced
//! back to the configured `RACINE_BIND_ADDR`.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::io;
use std::net::SocketAddr;

/// Result alias for API server operations.
pub type ApiServerResult<T> = Result<T, ApiServerError>;

/// Errors raised while starting or running the HTTP listener.
#[derive(Debug)]
pub enum ApiServerError {
    /// The listen socket could not be opened.
    Bind {
        /// Requested listen address.
        addr: SocketAddr,
        /// Socket error.
        source: io::Error,
    },
    /// The accept loop stopped with an error.
    Serve {
        /// Listen address in use.
        addr: SocketAddr,
        /// Socket error.
        source: io::Error,
    },
}

impl ApiServerError {
    /// Address the failing listener was bound, or meant to be bound, to.
    #[must_use]
    pub const fn addr(&self) -> SocketAddr {
        match self {
            Self::Bind { addr, .. } | Self::Serve { addr, .. } => *addr,
        }
    }
}

impl Display for ApiServerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bind { .. } => "could not bind http listener",
            Self::Serve { .. } => "http listener stopped unexpectedly",
        })
    }
}

impl Error for ApiServerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Bind { source, .. } | Self::Serve { source, .. } => Some(source),
        }
    }
}
