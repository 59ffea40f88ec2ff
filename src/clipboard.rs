//! Clipboard output
//!
//! The session hands the selected entry to a `ClipboardSink`. The real
//! implementation talks to the system clipboard through `arboard`.

use thiserror::Error;

/// Errors from writing to the clipboard
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// No clipboard could be opened (e.g. no display server)
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The clipboard rejected the write
    #[error("Clipboard error: {0}")]
    Write(String),
}

/// Destination for copied text
pub trait ClipboardSink {
    /// Replace the clipboard contents with `text`
    ///
    /// # Errors
    ///
    /// Returns `ClipboardError` if the clipboard is unavailable or the write fails.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard
///
/// The handle is opened on first use and kept open between copies. On X11
/// and Wayland the copied text disappears once its owning handle is dropped.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    /// Create a clipboard sink; nothing is opened until the first copy
    #[must_use]
    pub const fn new() -> Self {
        Self { handle: None }
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("open", &self.handle.is_some())
            .finish()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.handle.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.handle = Some(clipboard);
        }

        let Some(clipboard) = self.handle.as_mut() else {
            return Err(ClipboardError::Unavailable("no clipboard handle".to_string()));
        };

        match clipboard.set_text(text) {
            Ok(()) => Ok(()),
            Err(e) => {
                // A stale handle won't recover; reopen on the next attempt
                self.handle = None;
                Err(ClipboardError::Write(e.to_string()))
            }
        }
    }
}
