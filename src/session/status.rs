//! Transient status messages

use std::time::{Duration, Instant};

/// Status text shown after a successful copy
pub const COPIED_TEXT: &str = "Copied to clipboard";

/// Status text shown when the clipboard write fails
pub const COPY_FAILED_TEXT: &str = "Error copying to clipboard";

/// A status message with an absolute expiry time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Message text
    pub text: String,
    /// Instant at which the message stops being shown
    pub expiry: Instant,
}

impl StatusMessage {
    /// Create a message that expires `ttl` after `now`
    #[must_use]
    pub fn new(text: impl Into<String>, now: Instant, ttl: Duration) -> Self {
        Self {
            text: text.into(),
            expiry: now + ttl,
        }
    }

    /// Whether the message has expired at `now`
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expiry
    }
}
