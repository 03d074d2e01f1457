//! Go-style synchronous initialization API.
//!
//! Function names follow Go's exported-identifier convention so call sites
//! read like the reference package they are compared against.

#![allow(non_snake_case)]

use crate::startup::{self, Initialization};
use crate::types::LibraryOptions;

/// Initialize the library with default options. Blocks only for its own
/// execution and never panics.
pub fn InitializeLibrary(message: &str) {
    InitializeLibraryWithOptions(message, LibraryOptions::default());
}

/// Initialize the library with explicit options.
pub fn InitializeLibraryWithOptions(message: &str, options: LibraryOptions) {
    initialize(message, options);
}

pub(crate) fn initialize(message: &str, options: LibraryOptions) -> Initialization {
    startup::prepare(message, &options)
}
