//! Event handling for the ratatui TUI
//!
//! Maps key events onto session operations. Which keys are live depends
//! on the session mode: navigation and commands while browsing, text
//! editing while searching.

use super::state::ViewState;
use crate::clipboard::ClipboardSink;
use crate::session::{Mode, Session};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// The session asked to quit
    Quit,
    /// No action taken
    Ignored,
}

/// Whether the key is ctrl-c, the interrupt key in raw mode
fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Handle keys while browsing the list
fn handle_browsing(
    session: &mut Session,
    view: &mut ViewState,
    clipboard: &mut dyn ClipboardSink,
    key: KeyEvent,
    now: Instant,
) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => {
            session.quit();
            EventResult::Quit
        }
        (KeyCode::Char('s'), KeyModifiers::NONE) => {
            session.enter_search();
            view.search.clear();
            EventResult::Continue
        }
        (KeyCode::Char('y'), KeyModifiers::NONE) => {
            session.copy_selection(clipboard, now);
            EventResult::Continue
        }

        // Navigation
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            session.move_cursor(1);
            EventResult::Continue
        }
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
            session.move_cursor(-1);
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Handle keys while the search field has focus
fn handle_searching(session: &mut Session, view: &mut ViewState, key: KeyEvent) -> EventResult {
    let changed = match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => {
            session.confirm_search();
            return EventResult::Continue;
        }
        (KeyCode::Esc, _) => {
            session.cancel_search();
            view.search.clear();
            return EventResult::Continue;
        }

        // Query editing
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => view.search.clear(),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            view.search.push(c);
            true
        }
        (KeyCode::Backspace, _) => view.search.backspace(),
        (KeyCode::Delete, _) => view.search.delete(),
        (KeyCode::Left, _) => {
            view.search.left();
            return EventResult::Continue;
        }
        (KeyCode::Right, _) => {
            view.search.right();
            return EventResult::Continue;
        }
        (KeyCode::Home, _) => {
            view.search.home();
            return EventResult::Continue;
        }
        (KeyCode::End, _) => {
            view.search.end();
            return EventResult::Continue;
        }

        _ => return EventResult::Ignored,
    };

    if changed {
        session.update_search_query(view.search.text());
        EventResult::Continue
    } else {
        EventResult::Ignored
    }
}

/// Apply one key event to the session
///
/// Expired status messages are cleared first, on every key, so a message
/// stays up until the next key after its expiry.
pub fn handle_key(
    session: &mut Session,
    view: &mut ViewState,
    clipboard: &mut dyn ClipboardSink,
    key: KeyEvent,
    now: Instant,
) -> EventResult {
    session.tick_status_expiry(now);

    if key.kind == KeyEventKind::Release {
        return EventResult::Ignored;
    }

    if is_interrupt(&key) {
        session.quit();
        return EventResult::Quit;
    }

    match session.mode() {
        Mode::Browsing => handle_browsing(session, view, clipboard, key, now),
        Mode::Searching => handle_searching(session, view, key),
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(
    session: &mut Session,
    view: &mut ViewState,
    clipboard: &mut dyn ClipboardSink,
    timeout: Duration,
) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => handle_key(session, view, clipboard, key, Instant::now()),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}
