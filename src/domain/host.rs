//! Local hostname resolution.
//!
//! The hostname is looked up once when the process state is built and never
//! refreshed. Any lookup failure degrades to [`UNKNOWN_HOST`].

use std::ffi::OsString;
use std::io;

use crate::error::HostnameError;

/// Sentinel used when the hostname cannot be determined.
pub const UNKNOWN_HOST: &str = "unknown-host";

/// Resolves the machine hostname, falling back to [`UNKNOWN_HOST`].
pub fn resolve_hostname() -> String {
    resolve_hostname_with(hostname::get)
}

/// Resolves a hostname through `lookup`, falling back to [`UNKNOWN_HOST`].
///
/// Failures are logged once at `WARN` and never surfaced to the caller.
pub fn resolve_hostname_with<F>(lookup: F) -> String
where
    F: FnOnce() -> io::Result<OsString>,
{
    match try_resolve(lookup) {
        Ok(name) => name,
        Err(e) => {
            tracing::warn!("Hostname resolution failed: {}. Using '{}'", e, UNKNOWN_HOST);
            UNKNOWN_HOST.to_string()
        }
    }
}

fn try_resolve<F>(lookup: F) -> Result<String, HostnameError>
where
    F: FnOnce() -> io::Result<OsString>,
{
    let raw = lookup()?;
    let name = raw.into_string().map_err(HostnameError::NotUnicode)?;
    let name = name.trim();

    if name.is_empty() {
        return Err(HostnameError::Empty);
    }

    Ok(name.to_string())
}
