//! Native async initialization API.
//!
//! The futures returned here complete on their first poll. They are `async`
//! so callers can drive them alongside other tasks without blocking.

use crate::startup::{self, Initialization};
use crate::types::LibraryOptions;

/// Initialize the library with default options.
///
/// Completes with `()` for every input, including the empty string.
pub async fn initialize_library(message: &str) {
    initialize_library_with(message, &LibraryOptions::default()).await
}

/// Initialize the library with explicit options.
pub async fn initialize_library_with(message: &str, options: &LibraryOptions) {
    initialize(message, options).await;
}

pub(crate) async fn initialize(message: &str, options: &LibraryOptions) -> Initialization {
    startup::prepare(message, options)
}
