//! Shared transport context.
//!
//! # Design
//! - One transport per app boot, handed to components through Yew context.

use std::rc::Rc;

use crate::services::api::FetchTransport;

/// Context carrying the health transport.
#[derive(Clone, Default)]
pub(crate) struct ApiCtx {
    pub(crate) transport: Rc<FetchTransport>,
}

impl PartialEq for ApiCtx {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.transport, &other.transport)
    }
}
