//! Value types shared by both initializer surfaces.
//!
//! These are transient records: callers build them, read them and drop them.
//! Nothing here holds process-wide state.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{LibraryError, INVALID_MODE};

/// Options accepted by the initializers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LibraryOptions {
    pub enable_logging: bool,
    /// Timeout in milliseconds
    pub timeout: u64,
}

impl LibraryOptions {
    pub fn new(enable_logging: bool, timeout: u64) -> Self {
        Self {
            enable_logging,
            timeout,
        }
    }

    /// Timeout as a `Duration`
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_millis(self.timeout)
    }
}

/// Outcome record produced by callers of the library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryResult {
    pub success: bool,
    pub data: String,
    /// Epoch milliseconds
    pub timestamp: i64,
}

impl LibraryResult {
    /// Build a result stamped with the current time
    pub fn now(success: bool, data: impl Into<String>) -> Self {
        Self {
            success,
            data: data.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

/// How an operation executes. Descriptive only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationMode {
    Sync,
    Async,
    Streaming,
}

impl OperationMode {
    pub const ALL: [OperationMode; 3] = [
        OperationMode::Sync,
        OperationMode::Async,
        OperationMode::Streaming,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationMode::Sync => "sync",
            OperationMode::Async => "async",
            OperationMode::Streaming => "streaming",
        }
    }
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationMode {
    type Err = LibraryError;

    /// Labels are matched exactly; `"Sync"` or `" sync"` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sync" => Ok(OperationMode::Sync),
            "async" => Ok(OperationMode::Async),
            "streaming" => Ok(OperationMode::Streaming),
            other => Err(LibraryError::new(
                format!(
                    "Unknown operation mode '{}' (expected sync, async or streaming)",
                    other
                ),
                INVALID_MODE,
            )),
        }
    }
}
