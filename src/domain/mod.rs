//! Domain layer: visit counting, classification, and host identity.
//!
//! Nothing here depends on HTTP types. The middleware in
//! [`crate::api::middleware::request_logger`] extracts request data and
//! hands it to these types.
//!
//! # Modules
//!
//! - [`counter`] - Atomic visit counter
//! - [`visit`] - Health-check classification and the log record
//! - [`host`] - One-time hostname resolution with fallback

pub mod counter;
pub mod host;
pub mod visit;

pub use counter::VisitCounter;
pub use host::{UNKNOWN_HOST, resolve_hostname};
pub use visit::{VisitKind, VisitRecord};
