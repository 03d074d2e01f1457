//! Shared initialization logic.
//!
//! Both the native async surface and the Go-style sync surface delegate to
//! [`prepare`], so their behavior cannot drift apart.

mod prepare;

pub use prepare::{prepare, Initialization};
