//! Pipeline building blocks: the invocation request, input resolution,
//! operation routing, result naming, content formatting and output sinks.
//! These are consumed by the high-level `api` module.
pub mod format;
pub mod input;
pub mod naming;
pub mod request;
pub mod router;
pub mod sink;
