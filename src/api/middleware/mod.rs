//! HTTP middleware for request processing.
//!
//! Provides observability, recovery, deadline and cross-origin layers.

pub mod cors;
pub mod panic;
pub mod request_id;
pub mod timeout;
pub mod tracing;
