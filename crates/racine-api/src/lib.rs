#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::redundant_pub_crate)]

//! HTTP API for the racine backend.
//!
//! Layout: `http/router.rs` (server host and middleware stack), `http/health.rs`
//! (health, ping and metrics handlers), `http/hosts.rs` (host allow-list),
//! `http/errors.rs` (problem responses), `models.rs` (wire payloads).

pub mod error;
pub mod http;
pub mod models;
pub(crate) mod state;

pub use error::{ApiServerError, ApiServerResult};
pub use http::router::ApiServer;
