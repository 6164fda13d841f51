//! Error types.
//!
//! The middleware has no fallible path visible to callers: hostname failures
//! are recovered at startup and downstream errors pass through untouched.

use std::ffi::OsString;
use std::io;

use thiserror::Error;

/// Reasons the local hostname could not be resolved.
///
/// Always recovered by substituting [`crate::domain::UNKNOWN_HOST`].
#[derive(Debug, Error)]
pub enum HostnameError {
    #[error("hostname lookup failed: {0}")]
    Lookup(#[from] io::Error),

    #[error("hostname is not valid UTF-8: {0:?}")]
    NotUnicode(OsString),

    #[error("hostname is empty")]
    Empty,
}
