//! Environment-backed configuration.
//!
//! Options can be supplied through environment variables and are then
//! overridden by explicit CLI flags.

use tracing::debug;

use crate::error::{LibraryError, Result, INVALID_CONFIG};
use crate::types::LibraryOptions;

/// Enables logging of initializer messages
pub const ENABLE_LOGGING_ENV: &str = "LIBINIT_ENABLE_LOGGING";

/// Timeout in milliseconds
pub const TIMEOUT_MS_ENV: &str = "LIBINIT_TIMEOUT_MS";

/// Name of the Go package shown in the banner
pub const GO_PACKAGE_ENV: &str = "LIBINIT_GO_PACKAGE";

/// Parse a boolean flag value ("1", "true", "yes", "on" and their negatives)
pub fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(LibraryError::new(
            format!("Invalid boolean for {}: '{}'", key, value),
            INVALID_CONFIG,
        )),
    }
}

impl LibraryOptions {
    /// Load options from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load options through an arbitrary variable lookup.
    ///
    /// Missing variables keep their defaults; malformed ones are rejected.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = LibraryOptions::default();

        if let Some(value) = lookup(ENABLE_LOGGING_ENV) {
            options.enable_logging = parse_flag(ENABLE_LOGGING_ENV, &value)?;
        }

        if let Some(value) = lookup(TIMEOUT_MS_ENV) {
            options.timeout = value.trim().parse::<u64>().map_err(|e| {
                LibraryError::new(
                    format!("Invalid {}: '{}' ({})", TIMEOUT_MS_ENV, value, e),
                    INVALID_CONFIG,
                )
            })?;
        }

        debug!(
            "Loaded options: enable_logging={}, timeout={}ms",
            options.enable_logging, options.timeout
        );
        Ok(options)
    }
}
