//! Browser-side transports.

pub(crate) mod api;
