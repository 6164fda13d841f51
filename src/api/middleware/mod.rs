//! HTTP middleware for request processing and observability.
//!
//! - [`request_logger`] - Visit counting and per-request log line
//! - [`tracing`] - HTTP spans via tower-http

pub mod request_logger;
pub mod tracing;

pub use request_logger::{RequestLogger, RequestLoggerLayer, VisitLogger};
