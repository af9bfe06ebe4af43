//! DOM-free status page logic, testable on native targets.

pub mod json;
pub mod page;
pub mod probe;
pub mod status;
