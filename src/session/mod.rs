//! Browser session state machine
//!
//! The `Session` owns everything the browser knows: the loaded entries,
//! the filtered view, the cursor, the current mode, the search query and
//! the transient status message. Each user-facing operation is a method
//! that mutates the session and nothing else, so the whole interaction
//! can be driven and tested without a terminal.
//!
//! # Modes
//!
//! ```text
//!            enter_search()
//!   Browsing ─────────────▶ Searching
//!      ▲                        │
//!      └────────────────────────┘
//!     confirm_search() / cancel_search()
//! ```
//!
//! Operations called in the wrong mode are no-ops. Time-dependent
//! operations take `now` explicitly; the status message expires lazily
//! on the next `tick_status_expiry` call rather than on a timer.

mod entry;
mod filter;
mod status;

pub use entry::{Entry, EntrySet, SourceKind};
pub use filter::filter_entries;
pub use status::{COPIED_TEXT, COPY_FAILED_TEXT, StatusMessage};

use crate::clipboard::ClipboardSink;
use crate::source::{EntrySource, LoadError};
use std::time::{Duration, Instant};

/// Default lifetime of a status message
pub const DEFAULT_STATUS_TTL: Duration = Duration::from_secs(2);

/// Which input stream the session is consuming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigation and commands are active
    #[default]
    Browsing,
    /// The search field has focus
    Searching,
}

/// Interactive state of the entry browser
#[derive(Debug)]
pub struct Session {
    entries: EntrySet,
    source: SourceKind,
    /// Indices into `entries` of the currently visible items
    filtered: Vec<usize>,
    cursor: usize,
    mode: Mode,
    query: String,
    status: Option<StatusMessage>,
    status_ttl: Duration,
    quit: bool,
}

impl Session {
    /// Create a session over `entries` in its initial browsing state
    #[must_use]
    pub fn new(entries: EntrySet, source: SourceKind) -> Self {
        let filtered = filter_entries(&entries, "");
        Self {
            entries,
            source,
            filtered,
            cursor: 0,
            mode: Mode::Browsing,
            query: String::new(),
            status: None,
            status_ttl: DEFAULT_STATUS_TTL,
            quit: false,
        }
    }

    /// Load entries from `source` and create a session over them
    ///
    /// # Errors
    ///
    /// Returns `LoadError` if the source cannot be read or parsed.
    pub fn from_source(source: &dyn EntrySource) -> Result<Self, LoadError> {
        let entries = source.load()?;
        tracing::info!(count = entries.len(), source = %source.kind(), "loaded entries");
        Ok(Self::new(entries, source.kind()))
    }

    /// Override how long status messages stay visible
    #[must_use]
    pub const fn with_status_ttl(mut self, ttl: Duration) -> Self {
        self.status_ttl = ttl;
        self
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// All loaded entries
    #[must_use]
    pub const fn entries(&self) -> &EntrySet {
        &self.entries
    }

    /// Where the entries came from
    #[must_use]
    pub const fn source(&self) -> &SourceKind {
        &self.source
    }

    /// Entries of the filtered view, in source order
    pub fn filtered(&self) -> impl Iterator<Item = &Entry> + '_ {
        self.filtered
            .iter()
            .filter_map(|&idx| self.entries.get(idx))
    }

    /// Number of entries in the filtered view
    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Cursor position within the filtered view
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Entry under the cursor, if the view is non-empty
    #[must_use]
    pub fn selected(&self) -> Option<&Entry> {
        self.filtered
            .get(self.cursor)
            .and_then(|&idx| self.entries.get(idx))
    }

    /// Current mode
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Current search query
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Active status message, if any
    #[must_use]
    pub const fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Whether `quit` has been requested
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.quit
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Clamp the cursor into the filtered view
    fn recompute_cursor(&mut self) {
        let last = self.filtered.len().saturating_sub(1);
        self.cursor = self.cursor.min(last);
    }

    fn apply_query(&mut self, query: String) {
        self.filtered = filter_entries(&self.entries, &query);
        self.query = query;
        self.recompute_cursor();
    }

    /// Switch to searching with an empty query and the full entry set
    pub fn enter_search(&mut self) {
        if self.mode != Mode::Browsing {
            return;
        }
        self.mode = Mode::Searching;
        self.apply_query(String::new());
        tracing::debug!("entered search");
    }

    /// Replace the search query and refilter
    pub fn update_search_query(&mut self, text: impl Into<String>) {
        if self.mode != Mode::Searching {
            return;
        }
        self.apply_query(text.into());
        tracing::trace!(query = %self.query, matches = self.filtered.len(), "query updated");
    }

    /// Return to browsing, keeping the filtered view and cursor
    pub fn confirm_search(&mut self) {
        if self.mode != Mode::Searching {
            return;
        }
        self.mode = Mode::Browsing;
        tracing::debug!(query = %self.query, matches = self.filtered.len(), "search confirmed");
    }

    /// Return to browsing and drop the filter
    pub fn cancel_search(&mut self) {
        if self.mode != Mode::Searching {
            return;
        }
        self.apply_query(String::new());
        self.mode = Mode::Browsing;
        tracing::debug!("search cancelled");
    }

    /// Move the cursor by `delta`, clamped to the filtered view
    ///
    /// There is no wraparound at either end.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.mode != Mode::Browsing || self.filtered.is_empty() {
            return;
        }
        let last = self.filtered.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    /// Copy the selected entry to `sink` and record the outcome as status
    ///
    /// Clipboard failures never leave the session; they only change the
    /// status text.
    pub fn copy_selection(&mut self, sink: &mut dyn ClipboardSink, now: Instant) {
        if self.mode != Mode::Browsing {
            return;
        }
        let Some(entry) = self.selected() else {
            return;
        };

        let text = match sink.set_text(entry.as_str()) {
            Ok(()) => {
                tracing::info!("copied entry to clipboard");
                COPIED_TEXT
            }
            Err(e) => {
                tracing::warn!(error = %e, "clipboard write failed");
                COPY_FAILED_TEXT
            }
        };
        self.status = Some(StatusMessage::new(text, now, self.status_ttl));
    }

    /// Drop the status message if it has expired at `now`
    pub fn tick_status_expiry(&mut self, now: Instant) {
        if self.status.as_ref().is_some_and(|s| s.is_expired(now)) {
            self.status = None;
        }
    }

    /// Request termination
    pub fn quit(&mut self) {
        self.quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailingClipboard, RecordingClipboard};

    fn sample() -> Session {
        let entries: EntrySet = ["HOME=/root", "SHELL=/bin/bash", "PATH=/usr/bin"]
            .into_iter()
            .collect();
        Session::new(entries, SourceKind::Environment)
    }

    fn visible(session: &Session) -> Vec<&str> {
        session.filtered().map(Entry::as_str).collect()
    }

    #[test]
    fn test_initial_state() {
        let session = sample();
        assert_eq!(session.mode(), Mode::Browsing);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.query(), "");
        assert!(session.status().is_none());
        assert!(!session.should_quit());
        assert_eq!(session.filtered_len(), 3);
    }

    #[test]
    fn test_cursor_navigation() {
        let mut session = sample();

        session.move_cursor(1);
        assert_eq!(session.cursor(), 1);

        session.move_cursor(1);
        assert_eq!(session.cursor(), 2);

        // Should not go past end
        session.move_cursor(1);
        session.move_cursor(1);
        assert_eq!(session.cursor(), 2);

        session.move_cursor(-1);
        assert_eq!(session.cursor(), 1);

        // Should not go below zero
        session.move_cursor(-1);
        session.move_cursor(-1);
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn test_move_cursor_on_empty_view() {
        let mut session = Session::new(EntrySet::default(), SourceKind::Environment);
        session.move_cursor(1);
        session.move_cursor(-1);
        assert_eq!(session.cursor(), 0);
        assert!(session.selected().is_none());
    }

    #[test]
    fn test_move_cursor_ignored_while_searching() {
        let mut session = sample();
        session.enter_search();
        session.move_cursor(1);
        assert_eq!(session.cursor(), 0);
    }

    #[test]
    fn test_search_filters_and_clamps_cursor() {
        let mut session = sample();
        session.move_cursor(1);
        session.move_cursor(1);
        assert_eq!(session.cursor(), 2);

        session.enter_search();
        assert_eq!(session.mode(), Mode::Searching);

        session.update_search_query("sh");
        assert_eq!(visible(&session), vec!["SHELL=/bin/bash"]);
        assert_eq!(session.cursor(), 0);

        session.update_search_query("no such thing");
        assert_eq!(session.filtered_len(), 0);
        assert_eq!(session.cursor(), 0);
        assert!(session.selected().is_none());
    }

    #[test]
    fn test_update_query_ignored_while_browsing() {
        let mut session = sample();
        session.update_search_query("sh");
        assert_eq!(session.query(), "");
        assert_eq!(session.filtered_len(), 3);
    }

    #[test]
    fn test_confirm_keeps_view() {
        let mut session = sample();
        session.enter_search();
        session.update_search_query("bin");
        session.confirm_search();

        assert_eq!(session.mode(), Mode::Browsing);
        assert_eq!(visible(&session), vec!["SHELL=/bin/bash", "PATH=/usr/bin"]);
        assert_eq!(session.query(), "bin");

        session.move_cursor(1);
        assert_eq!(session.selected().map(Entry::as_str), Some("PATH=/usr/bin"));
    }

    #[test]
    fn test_enter_then_cancel_restores_state() {
        let mut session = sample();
        session.move_cursor(1);
        let before_view: Vec<String> = session.filtered().map(ToString::to_string).collect();
        let before_cursor = session.cursor();

        session.enter_search();
        session.cancel_search();

        let after_view: Vec<String> = session.filtered().map(ToString::to_string).collect();
        assert_eq!(after_view, before_view);
        assert_eq!(session.cursor(), before_cursor);
        assert_eq!(session.mode(), Mode::Browsing);
        assert_eq!(session.query(), "");
    }

    #[test]
    fn test_cancel_after_narrowing_restores_full_view() {
        let mut session = sample();
        session.enter_search();
        session.update_search_query("path");
        assert_eq!(session.filtered_len(), 1);

        session.cancel_search();
        assert_eq!(session.filtered_len(), 3);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.query(), "");
    }

    #[test]
    fn test_enter_search_resets_confirmed_filter() {
        let mut session = sample();
        session.enter_search();
        session.update_search_query("home");
        session.confirm_search();
        assert_eq!(session.filtered_len(), 1);

        session.enter_search();
        assert_eq!(session.query(), "");
        assert_eq!(session.filtered_len(), 3);
    }

    #[test]
    fn test_cancel_leaves_status_untouched() {
        let mut session = sample();
        let mut clipboard = RecordingClipboard::default();
        let now = Instant::now();
        session.copy_selection(&mut clipboard, now);
        let status = session.status().cloned();

        session.enter_search();
        session.cancel_search();
        assert_eq!(session.status().cloned(), status);
    }

    #[test]
    fn test_copy_selection_success() {
        let mut session = sample();
        let mut clipboard = RecordingClipboard::default();
        let now = Instant::now();

        session.move_cursor(1);
        session.copy_selection(&mut clipboard, now);

        assert_eq!(clipboard.writes, vec!["SHELL=/bin/bash".to_string()]);
        let status = session.status().expect("status should be set");
        assert_eq!(status.text, COPIED_TEXT);
        assert_eq!(status.expiry, now + DEFAULT_STATUS_TTL);
    }

    #[test]
    fn test_copy_selection_failure_sets_error_status() {
        let mut session = sample();
        let mut clipboard = FailingClipboard;
        let now = Instant::now();

        session.copy_selection(&mut clipboard, now);

        let status = session.status().expect("status should be set");
        assert_eq!(status.text, "Error copying to clipboard");
        assert_eq!(status.expiry, now + Duration::from_secs(2));
        assert_eq!(session.mode(), Mode::Browsing);
    }

    #[test]
    fn test_copy_selection_on_empty_view_is_noop() {
        let mut session = sample();
        session.enter_search();
        session.update_search_query("zzz");
        session.confirm_search();

        let mut clipboard = RecordingClipboard::default();
        session.copy_selection(&mut clipboard, Instant::now());

        assert!(clipboard.writes.is_empty());
        assert!(session.status().is_none());
    }

    #[test]
    fn test_copy_selection_ignored_while_searching() {
        let mut session = sample();
        session.enter_search();
        let mut clipboard = RecordingClipboard::default();
        session.copy_selection(&mut clipboard, Instant::now());
        assert!(clipboard.writes.is_empty());
        assert!(session.status().is_none());
    }

    #[test]
    fn test_status_expires_lazily() {
        let mut session = sample().with_status_ttl(Duration::from_millis(500));
        let mut clipboard = RecordingClipboard::default();
        let now = Instant::now();
        session.copy_selection(&mut clipboard, now);

        session.tick_status_expiry(now + Duration::from_millis(499));
        assert!(session.status().is_some());

        session.tick_status_expiry(now + Duration::from_millis(500));
        assert!(session.status().is_none());

        // Ticking with nothing set stays empty
        session.tick_status_expiry(now + Duration::from_secs(5));
        assert!(session.status().is_none());
    }

    #[test]
    fn test_quit_from_any_mode() {
        let mut session = sample();
        session.quit();
        assert!(session.should_quit());

        let mut session = sample();
        session.enter_search();
        session.quit();
        assert!(session.should_quit());
    }

    #[test]
    fn test_from_source() {
        use crate::source::StaticEntries;

        let source = StaticEntries::new(vec![Entry::new("A=1"), Entry::new("B=2")]);
        let session = Session::from_source(&source).unwrap();
        assert_eq!(session.entries().len(), 2);
        assert_eq!(session.source(), &SourceKind::Environment);
    }
}
