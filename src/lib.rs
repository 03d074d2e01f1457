//! Initialization API for a Rust port of a Go package.
//!
//! Two equivalent entry points are offered: [`initialize_library`], an
//! async function for native callers, and [`go_style::InitializeLibrary`],
//! a synchronous function named the way the Go package exports it.

pub mod banner;
pub mod config;
pub mod error;
pub mod go_style;
pub mod native;
pub mod startup;
pub mod types;
#[cfg(test)]
mod tests;

pub use banner::Banner;
pub use error::LibraryError;
pub use native::{initialize_library, initialize_library_with};
pub use types::{LibraryOptions, LibraryResult, OperationMode};
