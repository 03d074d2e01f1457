//! Pure initializer behind both public entry points.

use tracing::{debug, info};

use crate::types::LibraryOptions;

/// What an initializer call accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Initialization {
    /// Length of the message in characters
    pub message_chars: usize,
    /// Whether the message was logged at info level
    pub logged: bool,
}

impl Initialization {
    pub fn is_empty(&self) -> bool {
        self.message_chars == 0
    }
}

/// Accept a message and options. Never fails and holds no state.
///
/// The empty string is accepted and treated as a no-op.
pub fn prepare(message: &str, options: &LibraryOptions) -> Initialization {
    let message_chars = message.chars().count();

    if message_chars == 0 {
        debug!("Initialize called with empty message");
        return Initialization {
            message_chars,
            logged: false,
        };
    }

    if options.enable_logging {
        info!(timeout_ms = options.timeout, "{}", message);
    } else {
        debug!(timeout_ms = options.timeout, "Initialize: {}", message);
    }

    Initialization {
        message_chars,
        logged: options.enable_logging,
    }
}
