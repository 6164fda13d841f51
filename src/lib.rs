//! # Request Counter
//!
//! HTTP request-logging middleware that separates load balancer health
//! checks from user traffic, keeps a running visit count, and writes one
//! structured log line per request.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Visit counter, classification, hostname
//! - **API Layer** ([`api`]) - Tower middleware, handlers, and DTOs
//! - **Server** ([`server`], [`routes`], [`config`]) - Axum host that wires it together
//!
//! ## Log Format
//!
//! ```text
//! host=web-1, type=USER_VISIT, time=2024-05-01 12:00:00, path=/?ref=x, counter=2, ua=Mozilla/5.0
//! ```
//!
//! Requests whose `User-Agent` contains `ELB-HealthChecker` are logged as
//! `HEALTH_CHECK` and do not advance the counter.
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"   # Optional
//! export LOG_FORMAT="json"       # Optional
//! cargo run
//! ```

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use api::middleware::{RequestLogger, RequestLoggerLayer, VisitLogger};
pub use error::HostnameError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::api::middleware::{RequestLogger, RequestLoggerLayer, VisitLogger};
    pub use crate::domain::{UNKNOWN_HOST, VisitCounter, VisitKind, VisitRecord, resolve_hostname};
    pub use crate::state::AppState;
}
