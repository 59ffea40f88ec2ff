//! Testing utilities for envlist
//!
//! Mock collaborators that let session and UI tests run without a real
//! clipboard.
//!
//! Only available when compiled with `cfg(test)`.

use crate::clipboard::{ClipboardError, ClipboardSink};

/// Clipboard that records every write and always succeeds
#[derive(Debug, Default, Clone)]
pub struct RecordingClipboard {
    /// Texts written, oldest first
    pub writes: Vec<String>,
}

impl ClipboardSink for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writes.push(text.to_string());
        Ok(())
    }
}

/// Clipboard that rejects every write
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingClipboard;

impl ClipboardSink for FailingClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("test clipboard".to_string()))
    }
}
